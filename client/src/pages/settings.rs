//! Settings page: appearance, notifications, account, danger zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls write into the App-level `PreferencesState` immediately. Each
//! change arms a debounce timer tagged with the change's generation; when the
//! newest timer fires the full snapshot is written, and changes made during
//! that write are sent as one follow-up. The timer and the write hold the App
//! signal, so navigating away mid-debounce still saves. See
//! `state::preferences` for the state machine and `util::preferences` for the
//! loader.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::auth_gate::{AuthGate, LoadingScreen};
use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::preferences::{Language, PreferenceChange, PreferencesState, Theme};
use crate::state::toast::ToastState;
use crate::util::auth::sign_out;
use crate::util::preferences::record_change;

/// Writer status line shown in the corner, if any.
fn status_label(state: &PreferencesState) -> Option<&'static str> {
    if state.is_saving() {
        Some("Saving preferences...")
    } else if state.error {
        Some("Preferences not saved.")
    } else if state.is_dirty() {
        Some("Unsaved changes")
    } else {
        None
    }
}

fn theme_change(raw: &str) -> Option<PreferenceChange> {
    Theme::parse(raw).map(PreferenceChange::Theme)
}

fn language_change(raw: &str) -> Option<PreferenceChange> {
    Language::parse(raw).map(PreferenceChange::Language)
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AuthGate loading_label="Loading settings...">
            <SettingsView/>
        </AuthGate>
    }
}

#[component]
fn SettingsView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let prefs = expect_context::<RwSignal<PreferencesState>>();

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let current = move || prefs.get().current;

    view! {
        <div class="page">
            <NavBar link_href="/profile" link_label="Profile"/>
            <Show
                when=move || !prefs.get().loading
                fallback=|| view! { <LoadingScreen label="Loading settings..."/> }
            >
                <main class="container container--narrow">
                    <header class="page-header">
                        <h1>"Settings"</h1>
                        <p class="muted">"Manage your account preferences and application settings."</p>
                    </header>

                    <div class="grid grid--2">
                        <section class="card">
                            <h2 class="card__title">"Appearance"</h2>
                            <p class="muted">"Customize the look and feel of the application."</p>
                            <label class="field">
                                <span>"Theme"</span>
                                <select
                                    id="theme"
                                    class="input"
                                    prop:value=move || current().theme.as_str()
                                    on:change=move |ev| {
                                        if let Some(c) = theme_change(&event_target_value(&ev)) {
                                            record_change(prefs, toasts, c);
                                        }
                                    }
                                >
                                    {Theme::ALL
                                        .into_iter()
                                        .map(|t| view! {
                                            <option value=t.as_str() selected=move || current().theme == t>{t.label()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                <span>"Language"</span>
                                <select
                                    id="language"
                                    class="input"
                                    prop:value=move || current().language.as_str()
                                    on:change=move |ev| {
                                        if let Some(c) = language_change(&event_target_value(&ev)) {
                                            record_change(prefs, toasts, c);
                                        }
                                    }
                                >
                                    {Language::ALL
                                        .into_iter()
                                        .map(|l| view! {
                                            <option value=l.as_str() selected=move || current().language == l>{l.label()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </section>

                        <section class="card">
                            <h2 class="card__title">"Notifications"</h2>
                            <p class="muted">"Control how you receive notifications and updates."</p>
                            <label class="row row--between switch-row">
                                <div>
                                    <span>"Push Notifications"</span>
                                    <p class="muted">"Receive notifications about important updates."</p>
                                </div>
                                <input
                                    id="notifications"
                                    type="checkbox"
                                    class="switch"
                                    prop:checked=move || current().notifications
                                    on:change=move |ev| {
                                        record_change(prefs, toasts, PreferenceChange::Notifications(event_target_checked(&ev)));
                                    }
                                />
                            </label>
                            <label class="row row--between switch-row">
                                <div>
                                    <span>"Auto Save"</span>
                                    <p class="muted">"Automatically save your work while editing."</p>
                                </div>
                                <input
                                    id="autoSave"
                                    type="checkbox"
                                    class="switch"
                                    prop:checked=move || current().auto_save
                                    on:change=move |ev| {
                                        record_change(prefs, toasts, PreferenceChange::AutoSave(event_target_checked(&ev)));
                                    }
                                />
                            </label>
                        </section>

                        <section class="card">
                            <h2 class="card__title">"Account"</h2>
                            <p class="muted">"Manage your account information and security."</p>
                            <div class="row row--between">
                                <div>
                                    <span>"Email Address"</span>
                                    <p class="muted">{email}</p>
                                </div>
                                <button class="btn btn--outline" disabled=true>"Change Email"</button>
                            </div>
                            <hr/>
                            <div class="row row--between">
                                <div>
                                    <span>"Profile Settings"</span>
                                    <p class="muted">"Update your profile information and bio."</p>
                                </div>
                                <a href="/profile" class="btn btn--outline">"Edit Profile"</a>
                            </div>
                        </section>

                        <DangerZone/>
                    </div>
                </main>
            </Show>
            {move || {
                status_label(&prefs.get()).map(|label| view! { <div class="save-indicator">{label}</div> })
            }}
        </div>
    }
}

#[component]
fn DangerZone() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let on_sign_out = move |_| sign_out(auth);

    view! {
        <section class="card card--danger">
            <h2 class="card__title">"Danger Zone"</h2>
            <p class="muted">"Irreversible actions that affect your account."</p>
            <p class="alert">"These actions cannot be undone. Please proceed with caution."</p>
            <div class="row row--between">
                <div>
                    <span class="danger">"Sign Out"</span>
                    <p class="muted">"Sign out from your current session."</p>
                </div>
                <button class="btn btn--destructive" on:click=on_sign_out>"Sign Out"</button>
            </div>
        </section>
    }
}
