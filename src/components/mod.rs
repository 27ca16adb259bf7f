//! UI components for the portfolio shell.

pub mod chat;
pub mod credential_cards;
pub mod notification;
pub mod particle_field;
pub mod sidebar;
pub mod theme_switcher;
pub mod timeline;
