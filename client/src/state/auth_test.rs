use super::*;

fn user() -> User {
    User { id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_owned(), email: "ada@example.com".to_owned() }
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.status(), AuthStatus::Loading);
}

#[test]
fn settle_with_user_is_authenticated() {
    let mut state = AuthState::loading();
    state.settle(Some(user()));
    assert_eq!(state.status(), AuthStatus::Authenticated);
}

#[test]
fn settle_without_user_is_anonymous() {
    let mut state = AuthState::loading();
    state.settle(None);
    assert_eq!(state.status(), AuthStatus::Anonymous);
}

#[test]
fn begin_sign_out_drops_user_but_stays_loading() {
    let mut state = AuthState::loading();
    state.settle(Some(user()));
    state.begin_sign_out();
    assert!(state.user.is_none());
    assert_eq!(state.status(), AuthStatus::Loading);
}
