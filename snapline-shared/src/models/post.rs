use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post record as returned by the backend.
///
/// The client never constructs or edits posts; beyond the identifier, the
/// backend shape is carried verbatim in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier for the post.
    pub id: i64,

    /// Remaining backend-defined fields, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Post {
    /// Read a string field from the backend payload, if present.
    #[must_use]
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// One page of the paginated feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostPage {
    /// Total number of posts, when the backend reports it.
    #[serde(default)]
    pub count: Option<i64>,

    /// URL of the next page; present only while further pages exist.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,

    /// The posts on this page.
    #[serde(default)]
    pub results: Vec<Post>,
}

impl PostPage {
    /// Whether the server reported a further page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> Post {
        Post {
            id,
            fields: Map::new(),
        }
    }

    #[test]
    fn test_post_preserves_unknown_fields() {
        let json = r#"{
            "id": 12,
            "caption": "sunset",
            "image": "https://cdn.example.com/12.jpg",
            "likes_count": 4
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 12);
        assert_eq!(post.text_field("caption"), Some("sunset"));
        assert_eq!(post.text_field("likes_count"), None);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value.get("likes_count").and_then(|v| v.as_i64()), Some(4));
    }

    #[test]
    fn test_has_next_with_url() {
        let page = PostPage {
            count: Some(20),
            next: Some("/api/post?limit=6&page=2".to_string()),
            previous: None,
            results: vec![post(1)],
        };
        assert!(page.has_next());
    }

    #[test]
    fn test_has_next_absent() {
        let page = PostPage {
            count: Some(3),
            next: None,
            previous: Some("/api/post?limit=6&page=1".to_string()),
            results: vec![post(1), post(2), post(3)],
        };
        assert!(!page.has_next());
    }

    #[test]
    fn test_has_next_empty_string() {
        let page = PostPage {
            count: None,
            next: Some(String::new()),
            previous: None,
            results: vec![],
        };
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_deserialization_defaults() {
        let page: PostPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.count, None);
        assert!(!page.has_next());
        assert!(page.results.is_empty());
    }
}
