use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Profile updated successfully!");
    let b = state.destructive("Failed to update profile.");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].title, "Success");
    assert_eq!(state.toasts[1].title, "Error");
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn failure_message_distinguishes_unexpected() {
    let remote = ApiError::network("offline");
    let unexpected = ApiError::unexpected("bad body");
    assert_eq!(failure_message(&remote, "Failed to update profile."), "Failed to update profile.");
    assert_eq!(failure_message(&unexpected, "Failed to update profile."), UNEXPECTED_ERROR_MESSAGE);
}
