use super::*;

fn profile(name: Option<&str>, bio: Option<&str>) -> Profile {
    Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        display_name: name.map(str::to_owned),
        bio: bio.map(str::to_owned),
        avatar_url: None,
        preferences: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn absent_profile_initializes_empty_strings() {
    let mut state = ProfileState::default();
    state.apply_fetch(None);
    assert!(!state.loading);
    assert_eq!(state.draft, ProfileDraft { display_name: String::new(), bio: String::new() });
}

#[test]
fn null_fields_initialize_empty_strings() {
    let mut state = ProfileState::default();
    state.apply_fetch(Some(profile(None, None)));
    assert_eq!(state.draft, ProfileDraft::default());
    assert!(state.persisted.is_some());
}

#[test]
fn fetch_fills_draft_from_row() {
    let mut state = ProfileState::default();
    state.apply_fetch(Some(profile(Some("Ada"), Some("Math"))));
    assert_eq!(state.draft.display_name, "Ada");
    assert_eq!(state.draft.bio, "Math");
}

#[test]
fn fetch_failure_leaves_form_empty() {
    let mut state = ProfileState::default();
    state.fetch_failed();
    assert!(!state.loading);
    assert!(state.persisted.is_none());
    assert_eq!(state.draft, ProfileDraft::default());
}

#[test]
fn reset_restores_persisted_values() {
    let mut state = ProfileState::default();
    state.apply_fetch(Some(profile(Some("Ada"), None)));
    state.draft.display_name = "Grace".to_owned();
    state.draft.bio = "typed".to_owned();
    state.reset_draft();
    assert_eq!(state.draft.display_name, "Ada");
    assert_eq!(state.draft.bio, "");
}

#[test]
fn reset_without_profile_clears_draft() {
    let mut state = ProfileState::default();
    state.apply_fetch(None);
    state.draft.display_name = "typed".to_owned();
    state.reset_draft();
    assert_eq!(state.draft, ProfileDraft::default());
}

#[test]
fn failed_save_keeps_typed_value() {
    let mut state = ProfileState::default();
    state.apply_fetch(Some(profile(Some("Ada"), None)));
    state.draft.display_name = "Typed Name".to_owned();

    let body = state.begin_save().unwrap();
    assert_eq!(body.display_name, "Typed Name");
    assert!(state.save_disabled());
    assert_eq!(state.save_label(), "Saving...");

    state.finish_save();
    assert_eq!(state.draft.display_name, "Typed Name");
    assert_eq!(state.save_label(), "Save Changes");
}

#[test]
fn second_save_while_saving_is_refused() {
    let mut state = ProfileState::default();
    state.apply_fetch(None);
    assert!(state.begin_save().is_some());
    assert_eq!(state.begin_save(), None);
}

#[test]
fn identical_saves_produce_identical_state() {
    let mut state = ProfileState::default();
    state.apply_fetch(None);
    state.draft.display_name = "Ada".to_owned();

    let first = state.begin_save().unwrap();
    state.finish_save();
    state.apply_fetch(Some(profile(Some("Ada"), Some(""))));
    let after_first = state.clone();

    let second = state.begin_save().unwrap();
    state.finish_save();
    state.apply_fetch(Some(profile(Some("Ada"), Some(""))));

    assert_eq!(first.display_name, second.display_name);
    assert_eq!(state, after_first);
}
