use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    let mut state = AuthState::loading();
    state.settle(Some(User { id: "u1".to_owned(), email: "ada@example.com".to_owned() }));
    state
}

#[test]
fn anonymous_never_renders_children() {
    let mut state = AuthState::loading();
    state.settle(None);
    assert_eq!(gate_content(&state), GateContent::Empty);
}

#[test]
fn loading_shows_spinner_not_children() {
    assert_eq!(gate_content(&AuthState::loading()), GateContent::Spinner);
}

#[test]
fn signing_out_hides_children() {
    let mut state = signed_in();
    assert_eq!(gate_content(&state), GateContent::Children);
    state.begin_sign_out();
    assert_ne!(gate_content(&state), GateContent::Children);
}

#[test]
fn only_authenticated_sessions_reach_children() {
    let states = [AuthState::loading(), AuthState { user: None, loading: false }, signed_in()];
    let rendered: Vec<bool> = states.iter().map(|s| gate_content(s) == GateContent::Children).collect();
    assert_eq!(rendered, vec![false, false, true]);
}
