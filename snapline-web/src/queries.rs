//! One hook per backend operation.
//!
//! Each query hook pairs an [`SnaplineClient`] fetcher with its cache key;
//! each mutation hook names its row in the invalidation table. Queries
//! gated on an optional id or search term are disabled until the parameter
//! is present, so no request is ever issued for a malformed path.

use serde_json::Value;
use shared::models::{ChatMessage, Comment, CommentPayload, Post, User};
use yew::prelude::*;

use crate::api::SnaplineClient;
use crate::query::hooks::{use_app_mutation, use_app_query, use_feed_query};
use crate::query::{Mutation, QueryKey, QueryResult, QueryTag, UseFeedHandle, UseMutationHandle};

fn present(param: Option<&str>) -> bool {
    param.is_some_and(|value| !value.is_empty())
}

/// Users to suggest, optionally capped to `limit`.
#[hook]
pub fn use_get_users(limit: Option<u32>) -> QueryResult<Vec<User>> {
    use_app_query(QueryKey::of(QueryTag::Users), true, move || async move {
        SnaplineClient::shared().users(limit).await
    })
}

/// Users matching a search term. Disabled while the term is empty.
#[hook]
pub fn use_get_searched_users(search_term: String) -> QueryResult<Vec<User>> {
    let enabled = !search_term.is_empty();
    let key = QueryKey::with_param(QueryTag::SearchedUsers, search_term.clone());
    use_app_query(key, enabled, move || {
        let term = search_term.clone();
        async move { SnaplineClient::shared().search_users(&term).await }
    })
}

/// A single user's profile. Disabled until an id is available.
#[hook]
pub fn use_get_user(id: Option<String>) -> QueryResult<User> {
    let enabled = present(id.as_deref());
    let key = QueryKey::with_param(QueryTag::UserById, id.clone().unwrap_or_default());
    use_app_query(key, enabled, move || {
        let id = id.clone().unwrap_or_default();
        async move { SnaplineClient::shared().user_by_id(&id).await }
    })
}

/// Follow or unfollow a user, refreshing any cached profile.
#[hook]
pub fn use_follow_user_toggle() -> UseMutationHandle<String, Value> {
    use_app_mutation(Mutation::FollowUserToggle, |id: String| async move {
        SnaplineClient::shared().follow_user_toggle(&id).await
    })
}

/// Terminate the session on the backend and drop the persisted blob.
#[hook]
pub fn use_sign_out_account() -> UseMutationHandle<(), Value> {
    use_app_mutation(Mutation::SignOut, |(): ()| async move {
        SnaplineClient::shared().sign_out().await
    })
}

/// Comment on a post.
#[hook]
pub fn use_create_comment() -> UseMutationHandle<CommentPayload, Comment> {
    use_app_mutation(Mutation::CreateComment, |payload: CommentPayload| async move {
        SnaplineClient::shared().create_comment(&payload).await
    })
}

/// Toggle a like on a comment, refreshing the cached post it belongs to.
#[hook]
pub fn use_like_comment() -> UseMutationHandle<i64, Value> {
    use_app_mutation(Mutation::LikeComment, |comment_id: i64| async move {
        SnaplineClient::shared().like_comment(comment_id).await
    })
}

/// Like a post, refreshing the recent posts list.
#[hook]
pub fn use_like_post() -> UseMutationHandle<i64, Value> {
    use_app_mutation(Mutation::LikePost, |post_id: i64| async move {
        SnaplineClient::shared().like_post(post_id).await
    })
}

/// The most recent posts.
#[hook]
pub fn use_get_recent_posts() -> QueryResult<Vec<Post>> {
    use_app_query(QueryKey::of(QueryTag::RecentPosts), true, || async {
        SnaplineClient::shared().recent_posts().await
    })
}

/// Remove a like from a post, refreshing the recent posts list.
#[hook]
pub fn use_unlike_post() -> UseMutationHandle<i64, Value> {
    use_app_mutation(Mutation::UnlikePost, |post_id: i64| async move {
        SnaplineClient::shared().unlike_post(post_id).await
    })
}

/// Save a post for later, refreshing the recent posts list.
#[hook]
pub fn use_save_post() -> UseMutationHandle<i64, Value> {
    use_app_mutation(Mutation::SavePost, |post_id: i64| async move {
        SnaplineClient::shared().save_post(post_id).await
    })
}

/// Remove a post from the saved list, refreshing the recent posts list.
#[hook]
pub fn use_delete_saved_post() -> UseMutationHandle<i64, Value> {
    use_app_mutation(Mutation::DeleteSavedPost, |post_id: i64| async move {
        SnaplineClient::shared().unsave_post(post_id).await
    })
}

/// A single post. Disabled until an id is available.
#[hook]
pub fn use_get_post_by_id(post_id: Option<String>) -> QueryResult<Post> {
    let enabled = present(post_id.as_deref());
    let key = QueryKey::with_param(QueryTag::PostById, post_id.clone().unwrap_or_default());
    use_app_query(key, enabled, move || {
        let id = post_id.clone().unwrap_or_default();
        async move { SnaplineClient::shared().post_by_id(&id).await }
    })
}

/// Delete a post, refreshing the recent posts list.
#[hook]
pub fn use_delete_post() -> UseMutationHandle<String, Value> {
    use_app_mutation(Mutation::DeletePost, |post_id: String| async move {
        SnaplineClient::shared().delete_post(&post_id).await
    })
}

/// Posts authored by a user. Disabled until the id is available.
#[hook]
pub fn use_get_user_posts(user_id: Option<String>) -> QueryResult<Vec<Post>> {
    let enabled = present(user_id.as_deref());
    let key = QueryKey::with_param(QueryTag::UserPosts, user_id.clone().unwrap_or_default());
    use_app_query(key, enabled, move || {
        let id = user_id.clone().unwrap_or_default();
        async move { SnaplineClient::shared().user_posts(&id).await }
    })
}

/// The infinite home feed, six posts per page.
#[hook]
pub fn use_get_posts() -> UseFeedHandle {
    use_feed_query(|page| async move { SnaplineClient::shared().feed_page(page).await })
}

/// Posts matching a search term. Disabled while the term is empty.
#[hook]
pub fn use_search_posts(search_term: String) -> QueryResult<Vec<Post>> {
    let enabled = !search_term.is_empty();
    let key = QueryKey::with_param(QueryTag::SearchPosts, search_term.clone());
    use_app_query(key, enabled, move || {
        let term = search_term.clone();
        async move { SnaplineClient::shared().search_posts(&term).await }
    })
}

/// Posts the current user has saved.
#[hook]
pub fn use_saved_posts() -> QueryResult<Vec<Post>> {
    use_app_query(QueryKey::of(QueryTag::SavedPosts), true, || async {
        SnaplineClient::shared().saved_posts().await
    })
}

/// Posts the current user has liked.
#[hook]
pub fn use_liked_posts() -> QueryResult<Vec<Post>> {
    use_app_query(QueryKey::of(QueryTag::LikedPosts), true, || async {
        SnaplineClient::shared().liked_posts().await
    })
}

/// Message history of a chat room. Disabled while the room name is empty.
#[hook]
pub fn use_get_room_messages(room_name: String) -> QueryResult<Vec<ChatMessage>> {
    let enabled = !room_name.is_empty();
    let key = QueryKey::with_param(QueryTag::RoomMessages, room_name.clone());
    use_app_query(key, enabled, move || {
        let room = room_name.clone();
        async move { SnaplineClient::shared().room_messages(&room).await }
    })
}
