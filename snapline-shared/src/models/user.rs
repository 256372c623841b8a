use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a user profile as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's unique handle.
    pub username: String,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// Whether the user has staff privileges.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,

    /// Free-form profile text.
    #[serde(default)]
    pub bio: Option<String>,

    /// Absolute URL of the user's profile picture, when one is set.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// The session blob returned by login and registration.
///
/// The backend merges the profile fields with token material. Fields this
/// client does not interpret are kept verbatim in `extra` so the persisted
/// blob round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's unique handle.
    pub username: String,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// Whether the user has staff privileges.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,

    /// Free-form profile text.
    #[serde(default)]
    pub bio: Option<String>,

    /// Absolute URL of the user's profile picture, when one is set.
    #[serde(default)]
    pub profile_picture: Option<String>,

    /// Remaining backend-defined fields (token material and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request to authenticate with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to create a new account.
///
/// The confirmation field is forwarded as-is; matching the two passwords is
/// the backend's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's display name.
    pub name: String,

    /// The user's unique handle.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The password typed a second time.
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_info() -> UserInfo {
        UserInfo {
            id: 7,
            username: "ada".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            is_admin: false,
            bio: None,
            profile_picture: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": 3,
            "username": "grace",
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "isAdmin": true,
            "bio": "compilers",
            "profile_picture": null
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.username, "grace");
        assert!(user.is_admin);
        assert_eq!(user.bio.as_deref(), Some("compilers"));
        assert_eq!(user.profile_picture, None);
    }

    #[test]
    fn test_user_defaults_for_optional_fields() {
        let json = r#"{
            "id": 1,
            "username": "ada",
            "name": "Ada",
            "email": "ada@example.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.bio, None);
        assert_eq!(user.profile_picture, None);
    }

    #[test]
    fn test_user_info_preserves_unknown_fields() {
        let json = r#"{
            "id": 7,
            "username": "ada",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "access": "token-a",
            "refresh": "token-r"
        }"#;

        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.extra.get("access").and_then(|v| v.as_str()), Some("token-a"));

        let round_tripped = serde_json::to_value(&info).unwrap();
        assert_eq!(round_tripped.get("refresh").and_then(|v| v.as_str()), Some("token-r"));
        assert_eq!(round_tripped.get("username").and_then(|v| v.as_str()), Some("ada"));
    }

    #[test]
    fn test_user_info_round_trip() {
        let info = sample_user_info();
        let serialized = serde_json::to_string(&info).unwrap();
        let deserialized: UserInfo = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, info);
    }

    #[test]
    fn test_register_request_field_names() {
        let request = RegisterRequest {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("confirmPassword").is_some());
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
    }
}
