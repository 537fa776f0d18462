#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// The profile is read once from durable storage when the app mounts and is
/// never refreshed within a session.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}
