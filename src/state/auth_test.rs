use super::*;
use uuid::Uuid;

#[test]
fn auth_state_defaults_to_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.role().is_none());
    assert!(!state.is_admin());
}

#[test]
fn role_reflects_the_stored_user() {
    let state = AuthState {
        user: Some(User {
            id: Uuid::nil(),
            name: "Budi".to_owned(),
            role: Role::Admin,
        }),
        loading: false,
    };
    assert_eq!(state.role(), Some(Role::Admin));
    assert!(state.is_admin());
}
