use leptos::reactive::owner::Owner;

use super::*;

fn loaded_for(user_id: &str) -> PreferencesState {
    let mut state = PreferencesState::default();
    state.sync_user(Some(user_id));
    state.apply_fetch(None);
    state
}

#[test]
fn pending_change_survives_settings_page_teardown() {
    let app = Owner::new();
    app.set();
    let prefs = RwSignal::new(loaded_for("u1"));

    let page = app.child();
    let generation = page
        .with(|| prefs.try_update(|p| p.apply(PreferenceChange::Theme(Theme::Dark))))
        .unwrap();
    page.cleanup();

    let snapshot = claim_write(prefs, generation).expect("write should still be claimable");
    assert_eq!(snapshot.theme, Theme::Dark);
    assert!(prefs.get_untracked().is_saving());
}

#[test]
fn stale_timer_after_teardown_claims_nothing() {
    let app = Owner::new();
    app.set();
    let prefs = RwSignal::new(loaded_for("u1"));

    let page = app.child();
    let first = page.with(|| prefs.try_update(|p| p.apply(PreferenceChange::AutoSave(false)))).unwrap();
    let latest = page.with(|| prefs.try_update(|p| p.apply(PreferenceChange::Notifications(false)))).unwrap();
    page.cleanup();

    assert_eq!(claim_write(prefs, first), None);
    let snapshot = claim_write(prefs, latest).unwrap();
    assert!(!snapshot.auto_save);
    assert!(!snapshot.notifications);
}

#[test]
fn claim_after_user_switch_claims_nothing() {
    let app = Owner::new();
    app.set();
    let prefs = RwSignal::new(loaded_for("u1"));

    let generation = prefs.try_update(|p| p.apply(PreferenceChange::Theme(Theme::Light))).unwrap();
    prefs.update(|p| {
        p.sync_user(Some("u2"));
    });

    assert_eq!(claim_write(prefs, generation), None);
}

#[test]
fn toast_messages() {
    assert_eq!(SAVE_FAILED_MESSAGE, "Failed to save preferences.");
    assert_eq!(SAVED_MESSAGE, "Preferences saved successfully!");
}
