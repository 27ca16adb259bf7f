//! Scripted chat widget state
//!
//! The chat widget keeps a capped, persisted transcript and talks to its
//! responder through a request/response contract that always carries the
//! active persona. The real completion backend is an external
//! collaborator; this crate ships [`ScriptedResponder`], a local canned
//! responder implementing the same contract.

mod message;
mod scripted;
mod session;
mod transcript;

pub use message::{ChatMessage, ChatRole};
pub use scripted::ScriptedResponder;
pub use session::{ChatRequest, ChatResponder, ChatResponse, ChatSession, ChatWindow, ResponseStatus};
pub use transcript::{ChatTranscript, MAX_MESSAGES, RESTORE_VISIBLE};
