//! Chat message types for display and storage

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The visitor typing into the widget
    User,
    /// The assistant (scripted responder or backend)
    Assistant,
}

/// A single chat message ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier (ULID, time-ordered)
    pub id: String,
    /// Message author
    pub role: ChatRole,
    /// Message content (assistant messages may contain markdown)
    pub content: String,
    /// Unix timestamp in milliseconds when the message was created
    pub timestamp: i64,
    /// Whether this is an error-styled assistant message
    pub is_error: bool,
}

impl ChatMessage {
    /// Create a new message stamped with the current time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            is_error: false,
        }
    }

    /// Create an error-styled assistant message.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(ChatRole::Assistant, content)
        }
    }

    /// Format the timestamp as a relative time string.
    ///
    /// Returns strings like "Just now", "5m ago", "2h ago", "Yesterday".
    pub fn relative_time(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let diff_secs = (now - self.timestamp) / 1000;

        if diff_secs < 60 {
            "Just now".to_string()
        } else if diff_secs < 3600 {
            format!("{}m ago", diff_secs / 60)
        } else if diff_secs < 86400 {
            format!("{}h ago", diff_secs / 3600)
        } else if diff_secs < 172800 {
            "Yesterday".to_string()
        } else {
            format!("{}d ago", diff_secs / 86400)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::new(ChatRole::User, "Hello!");
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.content, "Hello!");
        assert!(!msg.is_error);
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let a = ChatMessage::new(ChatRole::User, "one");
        let b = ChatMessage::new(ChatRole::User, "one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_error_message_is_assistant() {
        let msg = ChatMessage::error("something broke");
        assert_eq!(msg.role, ChatRole::Assistant);
        assert!(msg.is_error);
    }

    #[test]
    fn test_relative_time_recent() {
        let msg = ChatMessage::new(ChatRole::User, "hi");
        assert_eq!(msg.relative_time(), "Just now");
    }

    #[test]
    fn test_serde_roundtrip() {
        let msg = ChatMessage::new(ChatRole::Assistant, "**bold** reply");
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
