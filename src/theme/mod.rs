//! Theme constants and global styles for the portfolio shell.

mod colors;
mod styles;

#[allow(unused_imports)]
pub use colors::*;
pub use styles::GLOBAL_STYLES;
