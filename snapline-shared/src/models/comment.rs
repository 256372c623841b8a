use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for creating a comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentPayload {
    /// Identifier of the post being commented on.
    pub post: i64,

    /// The comment text.
    pub content: String,
}

/// A comment record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique identifier for the comment.
    pub id: i64,

    /// Remaining backend-defined fields, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
