//! Single-slot persisted session blob.
//!
//! Written on successful login/register, removed by the sign-out request
//! path. `reset_user_info` deliberately leaves it untouched.

use shared::models::UserInfo;

/// Storage key the session blob lives under.
pub(crate) const USER_INFO_KEY: &str = "userInfo";

/// Read the persisted session blob.
///
/// An absent or unparsable blob yields `None`, so a corrupted entry signs
/// the user out instead of wedging startup.
#[must_use]
pub(crate) fn load() -> Option<UserInfo> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::get(USER_INFO_KEY).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the session blob after a successful login or registration.
pub(crate) fn save(user_info: &UserInfo) {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_storage::{LocalStorage, Storage};
        if let Err(err) = LocalStorage::set(USER_INFO_KEY, user_info) {
            web_sys::console::warn_1(&format!("failed to persist session: {err}").into());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = user_info;
    }
}

/// Remove the persisted session blob.
pub(crate) fn clear() {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::delete(USER_INFO_KEY);
    }
}
