use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    ApiError, ChatMessage, Comment, CommentPayload, LoginRequest, Post, PostPage, RegisterRequest,
    User, UserInfo,
};

use crate::auth::storage;
use crate::config::FrontendConfig;
use crate::query::pagination::FEED_PAGE_SIZE;

thread_local! {
    static SHARED_CLIENT: OnceCell<SnaplineClient> = OnceCell::new();
}

/// Lightweight API client for Snapline web interactions.
///
/// One method per backend operation; each issues exactly one request and
/// returns the parsed body unchanged. Non-success responses are classified
/// into [`ApiError`] at this boundary and never retried.
#[derive(Clone, Debug)]
pub struct SnaplineClient {
    base_url: String,
    client: Client,
}

impl SnaplineClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client, created on first use from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))
    }

    // Mutation endpoints answer with backend-defined bodies this client does
    // not interpret; an empty body is accepted as null.
    async fn parse_value(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| ApiError::transport(err.to_string()))
    }

    /// List users, optionally capped to `limit`.
    pub async fn users(&self, limit: Option<u32>) -> Result<Vec<User>, ApiError> {
        let mut request = self.client.get(self.api_url("user"));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        Self::parse(Self::send(request).await?).await
    }

    /// Search users by name or handle.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        let request = self
            .client
            .get(self.api_url("user/search"))
            .query(&[("query", query)]);
        Self::parse(Self::send(request).await?).await
    }

    /// Retrieve a single user's profile.
    pub async fn user_by_id(&self, id: &str) -> Result<User, ApiError> {
        let url = self.api_url(&format!("user/{id}/"));
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// Follow the user if not yet followed, unfollow otherwise.
    pub async fn follow_user_toggle(&self, id: &str) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("user/follow/{id}/"));
        Self::parse_value(Self::send(self.client.patch(url)).await?).await
    }

    /// Terminate the session and drop the persisted blob.
    ///
    /// Storage is cleared here rather than in `reset_user_info`; callers
    /// pair the two on sign-out.
    pub async fn sign_out(&self) -> Result<Value, ApiError> {
        let url = self.api_url("user/logout/");
        let result = Self::parse_value(Self::send(self.client.post(url)).await?).await;
        storage::clear();
        result
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<UserInfo, ApiError> {
        let url = self.api_url("user/login/");
        Self::parse(Self::send(self.client.post(url).json(payload)).await?).await
    }

    /// Create an account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<UserInfo, ApiError> {
        let url = self.api_url("user/register/");
        Self::parse(Self::send(self.client.post(url).json(payload)).await?).await
    }

    /// Comment on a post.
    pub async fn create_comment(&self, payload: &CommentPayload) -> Result<Comment, ApiError> {
        let url = self.api_url("post/comment/");
        Self::parse(Self::send(self.client.post(url).json(payload)).await?).await
    }

    /// Toggle a like on a comment.
    pub async fn like_comment(&self, comment_id: i64) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/comments/{comment_id}/like/"));
        Self::parse_value(Self::send(self.client.post(url)).await?).await
    }

    /// Like a post.
    pub async fn like_post(&self, post_id: i64) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/{post_id}/like/"));
        Self::parse_value(Self::send(self.client.post(url)).await?).await
    }

    /// Remove a like from a post.
    pub async fn unlike_post(&self, post_id: i64) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/{post_id}/unlike/"));
        Self::parse_value(Self::send(self.client.post(url)).await?).await
    }

    /// Save a post for later.
    pub async fn save_post(&self, post_id: i64) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/{post_id}/save/"));
        Self::parse_value(Self::send(self.client.post(url)).await?).await
    }

    /// Remove a post from the saved list.
    pub async fn unsave_post(&self, post_id: i64) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/{post_id}/unsave/"));
        Self::parse_value(Self::send(self.client.post(url)).await?).await
    }

    /// The most recent posts.
    pub async fn recent_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.api_url("post/recent");
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// Retrieve a single post.
    pub async fn post_by_id(&self, id: &str) -> Result<Post, ApiError> {
        let url = self.api_url(&format!("post/{id}/"));
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: &str) -> Result<Value, ApiError> {
        let url = self.api_url(&format!("post/{id}/"));
        Self::parse_value(Self::send(self.client.delete(url)).await?).await
    }

    /// Posts authored by the given user.
    pub async fn user_posts(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let url = self.api_url(&format!("post/user/{user_id}/"));
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// One page of the paginated feed.
    pub async fn feed_page(&self, page: u32) -> Result<PostPage, ApiError> {
        let request = self
            .client
            .get(self.api_url("post"))
            .query(&[("limit", FEED_PAGE_SIZE), ("page", page)]);
        Self::parse(Self::send(request).await?).await
    }

    /// Search posts by caption.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError> {
        let request = self
            .client
            .get(self.api_url("post/search"))
            .query(&[("query", query)]);
        Self::parse(Self::send(request).await?).await
    }

    /// Posts the current user has saved.
    pub async fn saved_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.api_url("post/saved");
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// Posts the current user has liked.
    pub async fn liked_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.api_url("post/liked");
        Self::parse(Self::send(self.client.get(url)).await?).await
    }

    /// Message history of a chat room.
    pub async fn room_messages(&self, room_name: &str) -> Result<Vec<ChatMessage>, ApiError> {
        let url = self.api_url(&format!("chat/{room_name}/messages"));
        Self::parse(Self::send(self.client.get(url)).await?).await
    }
}
