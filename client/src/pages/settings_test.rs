use super::*;

fn loaded() -> PreferencesState {
    let mut state = PreferencesState::default();
    state.apply_fetch(None);
    state
}

#[test]
fn status_label_idle_is_none() {
    assert_eq!(status_label(&loaded()), None);
}

#[test]
fn status_label_reports_dirty_then_saving() {
    let mut state = loaded();
    let generation = state.apply(PreferenceChange::Notifications(false));
    assert_eq!(status_label(&state), Some("Unsaved changes"));

    state.take_write(generation);
    assert_eq!(status_label(&state), Some("Saving preferences..."));
}

#[test]
fn status_label_reports_failure() {
    let mut state = loaded();
    let generation = state.apply(PreferenceChange::AutoSave(false));
    state.take_write(generation);
    state.finish_write(false);
    assert_eq!(status_label(&state), Some("Preferences not saved."));
}

#[test]
fn select_values_map_to_changes() {
    assert_eq!(theme_change("dark"), Some(PreferenceChange::Theme(Theme::Dark)));
    assert_eq!(theme_change("sepia"), None);
    assert_eq!(language_change("es"), Some(PreferenceChange::Language(Language::Es)));
    assert_eq!(language_change(""), None);
}
