//! Theme manager context for the portfolio shell.
//!
//! Provides the single [`ThemeManager`] instance (and its render model)
//! to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let manager = use_manager();
//! let model = use_document_model();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{ChatSession, DocumentModel, EntryGate, ThemeManager};
use tokio::sync::RwLock;

/// Shared manager type for context.
///
/// The manager is wrapped in Arc<RwLock<>> so components can mutate it
/// from event handlers while the init task owns construction.
pub type SharedManager = Arc<RwLock<Option<ThemeManager>>>;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the ThemeManager from context.
pub fn use_manager() -> Signal<SharedManager> {
    use_context::<Signal<SharedManager>>()
}

/// Hook to check if the manager finished initializing.
pub fn use_manager_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the render model the manager writes into.
pub fn use_document_model() -> Signal<DocumentModel> {
    use_context::<Signal<DocumentModel>>()
}

/// Render generation, bumped on every theme event.
///
/// Components that read rendered fields from the document model read
/// this signal too, so a persona switch re-renders them.
pub fn use_generation() -> Signal<u64> {
    use_context::<Signal<u64>>()
}

/// Whether focus is currently inside a text input.
///
/// Global shortcuts (Ctrl+T, Ctrl+/, Alt+digit) are suppressed while
/// typing.
#[derive(Clone, Copy, Default)]
pub struct TypingGuard(pub bool);

pub fn use_typing_guard() -> Signal<TypingGuard> {
    use_context::<Signal<TypingGuard>>()
}

/// Hook to access the one-time entry gate.
pub fn use_entry_gate() -> Signal<Arc<EntryGate>> {
    use_context::<Signal<Arc<EntryGate>>>()
}

/// Hook to access the chat session (None until storage is ready).
pub fn use_chat_session() -> Signal<Option<ChatSession>> {
    use_context::<Signal<Option<ChatSession>>>()
}
