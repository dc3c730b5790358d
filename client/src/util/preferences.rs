//! App-scoped preferences plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `RwSignal<PreferencesState>`. Loading follows the
//! signed-in user, the stored theme is applied from here, and the settings
//! page only records changes. Debounce timers and writes capture the App
//! signal, so leaving the settings page never drops a pending change.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthStatus};
use crate::state::preferences::{PreferenceChange, Preferences, PreferencesState, Theme};
use crate::state::toast::ToastState;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save preferences.";
pub const SAVED_MESSAGE: &str = "Preferences saved successfully!";

/// Claim the snapshot for the debounce timer tagged `generation`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn claim_write(prefs: RwSignal<PreferencesState>, generation: u64) -> Option<Preferences> {
    prefs.try_update(|p| p.take_write(generation)).flatten()
}

/// Keep `prefs` bound to the signed-in user and the document theme in sync.
///
/// A new user triggers a fetch; signing out resets to defaults.
pub fn install_preferences_sync(auth: RwSignal<AuthState>, prefs: RwSignal<PreferencesState>) {
    Effect::new(move || {
        let state = auth.get();
        if state.status() == AuthStatus::Loading {
            return;
        }
        let user_id = state.user.map(|u| u.id);
        let switched = prefs.try_update(|p| p.sync_user(user_id.as_deref())).unwrap_or(false);
        match user_id {
            Some(id) if switched => load(prefs, id),
            Some(_) => {}
            None => crate::util::theme::apply(Theme::default()),
        }
    });

    Effect::new(move || {
        let state = prefs.get();
        if !state.loading {
            crate::util::theme::apply(state.current.theme);
        }
    });
}

fn load(prefs: RwSignal<PreferencesState>, user_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let applied = match crate::net::api::fetch_preferences().await {
            Ok(stored) => prefs.try_update(|p| p.apply_fetch_for(&user_id, stored.as_ref())),
            Err(e) => {
                log::error!("preferences fetch failed: {e}");
                prefs.try_update(|p| p.fetch_failed_for(&user_id))
            }
        };
        if applied != Some(true) {
            log::debug!("dropping preferences fetched for {user_id}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (prefs, user_id);
}

/// Write `snapshot`, then any follow-up the state machine hands back.
#[cfg(feature = "hydrate")]
async fn write(prefs: RwSignal<PreferencesState>, toasts: RwSignal<ToastState>, mut snapshot: Preferences) {
    use crate::components::toast_host::{toast_error, toast_success};
    use crate::state::toast::failure_message;

    loop {
        let ok = match crate::net::api::save_preferences(&snapshot.to_value()).await {
            Ok(_) => {
                toast_success(toasts, SAVED_MESSAGE);
                true
            }
            Err(e) => {
                log::error!("preferences save failed: {e}");
                toast_error(toasts, failure_message(&e, SAVE_FAILED_MESSAGE));
                false
            }
        };
        match prefs.try_update(|p| p.finish_write(ok)).flatten() {
            Some(next) => snapshot = next,
            None => break,
        }
    }
}

/// Apply `change` now and arm the debounced write for it.
pub fn record_change(prefs: RwSignal<PreferencesState>, toasts: RwSignal<ToastState>, change: PreferenceChange) {
    let Some(generation) = prefs.try_update(|p| p.apply(change)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::preferences::WRITE_DEBOUNCE_MS;

        gloo_timers::future::TimeoutFuture::new(WRITE_DEBOUNCE_MS).await;
        if let Some(snapshot) = claim_write(prefs, generation) {
            write(prefs, toasts, snapshot).await;
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, generation);
}
