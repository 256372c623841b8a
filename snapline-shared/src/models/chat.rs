use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::Timestamp;

/// A single message from a chat room's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Handle of the user who sent the message.
    pub username: String,

    /// The message body.
    pub message: String,

    /// When the message was sent.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,

    /// Remaining backend-defined fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_chat_message_deserialization() {
        let json = r#"{
            "username": "ada",
            "message": "hello room",
            "timestamp": "2025-03-08T14:30:00Z"
        }"#;

        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.username, "ada");
        assert_eq!(message.message, "hello room");
        assert_eq!(
            message.timestamp,
            Some(Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()))
        );
    }

    #[test]
    fn test_chat_message_without_timestamp() {
        let json = r#"{"username": "ada", "message": "hi", "room": "general"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.timestamp, None);
        assert_eq!(message.extra.get("room").and_then(|v| v.as_str()), Some("general"));
    }
}
