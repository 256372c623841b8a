pub mod chat;
pub mod comment;
pub mod errors;
pub mod post;
pub mod timestamp;
pub mod user;

pub use chat::ChatMessage;
pub use comment::{Comment, CommentPayload};
pub use errors::{ApiError, FieldMessages, ValidationErrors};
pub use post::{Post, PostPage};
pub use timestamp::Timestamp;
pub use user::{LoginRequest, RegisterRequest, User, UserInfo};
