use shared::models::{ApiError, LoginRequest, RegisterRequest, UserInfo};
use yewdux::Dispatch;

use crate::api::SnaplineClient;

use super::session::SessionState;
use super::storage;

/// Sign in with email and password.
///
/// On success the response blob is persisted and becomes the session user;
/// on failure nothing is persisted, the user is cleared, and the transport
/// message lands in `error`. Overlapping calls race; the last response to
/// resolve wins.
pub async fn login(dispatch: Dispatch<SessionState>, request: LoginRequest) {
    dispatch.reduce_mut(SessionState::pending);
    match SnaplineClient::shared().login(&request).await {
        Ok(user_info) => {
            storage::save(&user_info);
            dispatch.reduce_mut(|state| state.fulfilled(user_info));
        }
        Err(err) => {
            dispatch.reduce_mut(|state| state.rejected(Some(err.to_string())));
        }
    }
}

/// Create an account and sign in with the result.
///
/// Validation failures surface as the backend's field messages joined with
/// newlines; anything else collapses to a generic failure line.
pub async fn register(dispatch: Dispatch<SessionState>, request: RegisterRequest) {
    dispatch.reduce_mut(SessionState::pending);
    match SnaplineClient::shared().register(&request).await {
        Ok(user_info) => {
            storage::save(&user_info);
            dispatch.reduce_mut(|state| state.fulfilled(user_info));
        }
        Err(err) => {
            let message = match err {
                ApiError::Validation(fields) => fields.joined(),
                ApiError::Transport(_) => "Registration failed".to_string(),
            };
            dispatch.reduce_mut(|state| state.rejected(Some(message)));
        }
    }
}

/// Restore the state the process started with.
///
/// Persisted storage is not touched here; the sign-out request path owns
/// that (see [`SnaplineClient::sign_out`]).
pub fn reset_user_info(dispatch: &Dispatch<SessionState>) {
    dispatch.set(SessionState::initial());
}

/// Replace the signed-in user's record; does nothing while signed out.
pub fn update_user(dispatch: &Dispatch<SessionState>, patch: UserInfo) {
    dispatch.reduce_mut(|state| state.replace_user(patch));
}
