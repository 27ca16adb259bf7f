//! Chat transcript - capped, persisted message history

use super::message::{ChatMessage, ChatRole};
use crate::persona::Persona;

/// Maximum number of messages kept in the transcript.
pub const MAX_MESSAGES: usize = 50;

/// Number of persisted messages restored into the visible log on startup.
pub const RESTORE_VISIBLE: usize = 10;

/// The chat widget's message history.
///
/// Append-ordered, deduplicated by message id, capped at [`MAX_MESSAGES`]
/// (oldest messages are dropped first).
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a transcript from persisted messages, keeping only the
    /// most recent [`RESTORE_VISIBLE`] as the visible log.
    pub fn restore(persisted: Vec<ChatMessage>) -> Self {
        let skip = persisted.len().saturating_sub(RESTORE_VISIBLE);
        Self {
            messages: persisted.into_iter().skip(skip).collect(),
        }
    }

    /// Append a message. Duplicates (same id) are ignored; when the cap
    /// is exceeded the oldest message is dropped.
    pub fn push(&mut self, message: ChatMessage) {
        if self.messages.iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.push(message);
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The persona-specific greeting seeded into an empty transcript.
    pub fn welcome_message(persona: Persona) -> ChatMessage {
        let content = match persona {
            Persona::Ai => {
                "🤖 **AI Engineering Mode Active**\n\n\
                 Hello! I'm the portfolio assistant. I'm here to help you explore:\n\n\
                 • **Machine Learning** & Deep Learning\n\
                 • **Generative AI** & Large Language Models\n\
                 • **Cloud Architecture** & MLOps\n\
                 • **Data Science** & Analytics\n\n\
                 Ask me anything about the AI projects, or try **\"What's the experience with AI?\"** to begin!"
            }
            Persona::Cyber => {
                "🔐 **Cybersecurity Mode Activated**\n\n\
                 Greetings! I'm the portfolio assistant, specialized in security topics:\n\n\
                 • **Penetration Testing** & Vulnerability Assessment\n\
                 • **Digital Forensics** & Incident Response\n\
                 • **OSINT** & Threat Intelligence\n\
                 • **Security Architecture** & Risk Management\n\n\
                 Feel free to ask about security work, or say **\"Tell me about the security projects\"** to get started!"
            }
        };
        ChatMessage::new(ChatRole::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push(ChatMessage::new(ChatRole::User, "first"));
        transcript.push(ChatMessage::new(ChatRole::Assistant, "second"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].content, "first");
        assert_eq!(transcript.last().unwrap().content, "second");
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut transcript = ChatTranscript::new();
        let msg = ChatMessage::new(ChatRole::User, "once");
        transcript.push(msg.clone());
        transcript.push(msg);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut transcript = ChatTranscript::new();
        for i in 0..(MAX_MESSAGES + 5) {
            transcript.push(ChatMessage::new(ChatRole::User, format!("msg {i}")));
        }

        assert_eq!(transcript.len(), MAX_MESSAGES);
        assert_eq!(transcript.messages()[0].content, "msg 5");
        assert_eq!(transcript.last().unwrap().content, format!("msg {}", MAX_MESSAGES + 4));
    }

    #[test]
    fn test_restore_keeps_recent_tail() {
        let persisted: Vec<_> = (0..30)
            .map(|i| ChatMessage::new(ChatRole::User, format!("msg {i}")))
            .collect();

        let transcript = ChatTranscript::restore(persisted);
        assert_eq!(transcript.len(), RESTORE_VISIBLE);
        assert_eq!(transcript.messages()[0].content, "msg 20");
        assert_eq!(transcript.last().unwrap().content, "msg 29");
    }

    #[test]
    fn test_restore_short_history() {
        let persisted = vec![ChatMessage::new(ChatRole::User, "only one")];
        let transcript = ChatTranscript::restore(persisted);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_welcome_message_is_persona_specific() {
        let ai = ChatTranscript::welcome_message(Persona::Ai);
        let cyber = ChatTranscript::welcome_message(Persona::Cyber);

        assert_eq!(ai.role, ChatRole::Assistant);
        assert!(ai.content.contains("AI Engineering Mode"));
        assert!(cyber.content.contains("Cybersecurity Mode"));
    }
}
