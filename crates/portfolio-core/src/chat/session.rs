//! Chat session - widget state and the responder contract

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::message::{ChatMessage, ChatRole};
use super::transcript::ChatTranscript;
use crate::error::PortfolioResult;
use crate::persona::Persona;
use crate::storage::TranscriptStore;

/// Outbound request to the completion collaborator.
///
/// The active persona rides along on every request so the collaborator
/// can tailor its replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub persona: Persona,
}

/// Reply status from the completion collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Reply from the completion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: ResponseStatus,
    pub message: String,
}

/// Anything that can answer a [`ChatRequest`].
pub trait ChatResponder: Send + Sync {
    fn respond(&self, request: &ChatRequest) -> PortfolioResult<ChatResponse>;
}

/// Open/maximize state of the chat widget window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatWindow {
    pub open: bool,
    pub maximized: bool,
}

impl ChatWindow {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing also leaves maximized mode.
    pub fn close(&mut self) {
        self.open = false;
        self.maximized = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }
}

/// The chat widget's session: transcript, window state, and send flow.
pub struct ChatSession {
    transcript: ChatTranscript,
    window: ChatWindow,
    /// Set between a submitted user message and its resolved reply
    pending: Option<String>,
    store: Arc<dyn TranscriptStore>,
}

impl ChatSession {
    /// Open a session, restoring the recent transcript tail from the
    /// store and seeding the persona's welcome message when the history
    /// is empty.
    pub fn new(store: Arc<dyn TranscriptStore>, persona: Persona) -> Self {
        let mut transcript = ChatTranscript::restore(store.load_transcript());
        if transcript.is_empty() {
            transcript.push(ChatTranscript::welcome_message(persona));
        }
        Self {
            transcript,
            window: ChatWindow::default(),
            pending: None,
            store,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    pub fn window(&self) -> ChatWindow {
        self.window
    }

    pub fn window_mut(&mut self) -> &mut ChatWindow {
        &mut self.window
    }

    /// Whether a reply is still outstanding (typing indicator).
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Append the visitor's message and mark a reply as outstanding.
    ///
    /// Rejects empty/whitespace input and input while a reply is already
    /// pending. Returns whether the message was accepted.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return false;
        }

        self.transcript.push(ChatMessage::new(ChatRole::User, text));
        self.pending = Some(text.to_string());
        self.persist();
        true
    }

    /// Resolve the outstanding reply through `responder`.
    ///
    /// A responder fault stays inside the widget as an error-styled
    /// assistant message; it never propagates.
    pub fn resolve(&mut self, persona: Persona, responder: &dyn ChatResponder) {
        let Some(message) = self.pending.take() else {
            return;
        };

        let request = ChatRequest { message, persona };
        let reply = match responder.respond(&request) {
            Ok(response) if response.status == ResponseStatus::Success => {
                ChatMessage::new(ChatRole::Assistant, response.message)
            }
            Ok(_) => ChatMessage::error(
                "❌ I apologize, but I encountered an issue. Please try asking your question again.",
            ),
            Err(e) => {
                tracing::warn!(error = %e, "chat responder failed");
                ChatMessage::error(
                    "⚠️ I'm experiencing technical difficulties. Please try again in a moment.",
                )
            }
        };

        self.transcript.push(reply);
        self.persist();
    }

    /// Submit and resolve in one step.
    pub fn send(&mut self, text: &str, persona: Persona, responder: &dyn ChatResponder) -> bool {
        if !self.submit(text) {
            return false;
        }
        self.resolve(persona, responder);
        true
    }

    /// Drop the history and reseed the welcome message.
    pub fn clear(&mut self, persona: Persona) {
        self.transcript.clear();
        self.pending = None;
        self.transcript.push(ChatTranscript::welcome_message(persona));
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_transcript(self.transcript.messages()) {
            tracing::warn!(error = %e, "failed to persist chat transcript");
        }
    }
}
