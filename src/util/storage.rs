//! Durable client storage.
//!
//! Exactly two keys live in `localStorage`: the authenticated user's profile
//! and the last-selected project id. Requires a browser environment; native
//! builds (unit tests) see an empty store.

use uuid::Uuid;

use crate::net::types::User;

#[cfg(feature = "browser")]
const USER_KEY: &str = "user";
#[cfg(feature = "browser")]
const PROJECT_KEY: &str = "current_project_id";

#[cfg(feature = "browser")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted user profile, if any.
pub fn read_user() -> Option<User> {
    #[cfg(feature = "browser")]
    {
        let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "browser"))]
    {
        None
    }
}

/// Persist the user profile at login.
pub fn write_user(user: &User) {
    #[cfg(feature = "browser")]
    {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(user)) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = user;
    }
}

/// Read the last-selected project id.
pub fn read_current_project() -> Option<Uuid> {
    #[cfg(feature = "browser")]
    {
        let raw = local_storage()?.get_item(PROJECT_KEY).ok().flatten()?;
        raw.parse().ok()
    }
    #[cfg(not(feature = "browser"))]
    {
        None
    }
}

/// Remember the selected project across sessions.
pub fn write_current_project(id: Uuid) {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(PROJECT_KEY, &id.to_string());
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = id;
    }
}

/// Forget the selected project (project deleted or session reset).
pub fn clear_current_project() {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(PROJECT_KEY);
        }
    }
}

/// Drop both keys at logout.
pub fn clear_all() {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(PROJECT_KEY);
        }
    }
}
