use super::*;

fn user(admin: bool) -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        is_admin: admin,
    }
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.status(), AuthStatus::Loading);
}

#[test]
fn loading_wins_over_present_user() {
    let state = AuthState { user: Some(user(false)), loading: true };
    assert_eq!(state.status(), AuthStatus::Loading);
}

#[test]
fn resolve_with_user_is_authenticated() {
    let mut state = AuthState::default();
    state.resolve(Some(user(false)));
    assert!(!state.loading);
    assert_eq!(state.status(), AuthStatus::Authenticated);
    assert!(!state.is_admin());
}

#[test]
fn resolve_without_user_is_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn sign_out_clears_user() {
    let mut state = AuthState { user: Some(user(true)), loading: false };
    assert!(state.is_admin());
    state.sign_out();
    assert!(state.user.is_none());
    assert!(!state.is_admin());
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}
