use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use shared::models::UserInfo;
use yewdux::store::Store;

use super::storage;

thread_local! {
    static INITIAL_STATE: OnceCell<SessionState> = OnceCell::new();
}

/// Session data for the signed-in user.
///
/// Hydrated from persisted storage at startup, replaced wholesale by the
/// auth actions, read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The signed-in user's session blob, if any.
    pub user_info: Option<UserInfo>,

    /// Whether an auth request is in flight.
    pub loading: bool,

    /// Message from the last failed auth request.
    pub error: Option<String>,
}

impl SessionState {
    /// The state the process started with, storage hydration included.
    ///
    /// Captured on first use so that later logins do not change what a
    /// reset restores.
    #[must_use]
    pub fn initial() -> Self {
        INITIAL_STATE.with(|cell| {
            cell.get_or_init(|| Self {
                user_info: storage::load(),
                loading: false,
                error: None,
            })
            .clone()
        })
    }

    /// An auth request was issued.
    pub(super) fn pending(&mut self) {
        self.loading = true;
    }

    /// An auth request succeeded with a fresh session blob.
    pub(super) fn fulfilled(&mut self, user_info: UserInfo) {
        self.loading = false;
        self.user_info = Some(user_info);
        self.error = None;
    }

    /// An auth request failed.
    pub(super) fn rejected(&mut self, message: Option<String>) {
        self.loading = false;
        self.user_info = None;
        self.error = message;
    }

    /// Replace the current user wholesale; does nothing while signed out.
    pub(super) fn replace_user(&mut self, patch: UserInfo) {
        if self.user_info.is_some() {
            self.user_info = Some(patch);
        }
    }
}

impl Store for SessionState {
    fn new(_cx: &yewdux::Context) -> Self {
        Self::initial()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
