//! Profile page: summary card plus display-name/bio editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the caller's profile row once authenticated. A missing row is the
//! "no profile yet" state and renders an empty form. Saving upserts
//! `{display_name, bio}` and re-fetches so server timestamps show up.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::auth_gate::{AuthGate, LoadingScreen};
use crate::components::nav_bar::NavBar;
use crate::net::types::Profile;
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::state::toast::ToastState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load profile data.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to update profile.";
pub const SAVED_MESSAGE: &str = "Profile updated successfully!";

/// Avatar fallback letter: display name first, then email.
fn avatar_initial(display_name: &str, email: &str) -> String {
    display_name
        .chars()
        .next()
        .or_else(|| email.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn display_name_or_anonymous(display_name: &str) -> &str {
    if display_name.is_empty() { "Anonymous User" } else { display_name }
}

/// "Joined <date>" from the row's RFC 3339 `created_at`, or "Joined Recently".
fn joined_label(profile: Option<&Profile>) -> String {
    match profile.and_then(|p| p.created_at.get(..10)) {
        Some(date) => format!("Joined {date}"),
        None => "Joined Recently".to_owned(),
    }
}

fn short_user_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("User ID: {prefix}...")
}

#[cfg(feature = "hydrate")]
async fn reload(profile: RwSignal<ProfileState>, toasts: RwSignal<ToastState>) {
    use crate::components::toast_host::toast_error;

    match crate::net::api::fetch_profile().await {
        Ok(row) => profile.update(|p| p.apply_fetch(row)),
        Err(e) => {
            log::error!("profile fetch failed: {e}");
            toast_error(toasts, LOAD_FAILED_MESSAGE);
            profile.update(ProfileState::fetch_failed);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn save(profile: RwSignal<ProfileState>, toasts: RwSignal<ToastState>, update: crate::net::types::ProfileUpdate) {
    use crate::components::toast_host::{toast_error, toast_success};
    use crate::state::toast::failure_message;

    match crate::net::api::save_profile(&update).await {
        Ok(_) => {
            toast_success(toasts, SAVED_MESSAGE);
            profile.update(ProfileState::finish_save);
            reload(profile, toasts).await;
        }
        Err(e) => {
            log::error!("profile save failed: {e}");
            toast_error(toasts, failure_message(&e, SAVE_FAILED_MESSAGE));
            profile.update(ProfileState::finish_save);
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AuthGate loading_label="Loading profile...">
            <ProfileView/>
        </AuthGate>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let profile = RwSignal::new(ProfileState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(reload(profile, toasts));
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let user_id = move || auth.get().user.map(|u| u.id).unwrap_or_default();
    let display_name = move || profile.get().draft.display_name;
    let avatar_url = move || profile.get().persisted.and_then(|p| p.avatar_url).filter(|u| !u.is_empty());

    let on_save = move |_| {
        let Some(update) = profile.try_update(ProfileState::begin_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(save(profile, toasts, update));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            profile.update(ProfileState::finish_save);
        }
    };

    view! {
        <div class="page">
            <NavBar link_href="/settings" link_label="Settings"/>
            <Show
                when=move || !profile.get().loading
                fallback=|| view! { <LoadingScreen label="Loading profile..."/> }
            >
                <main class="container container--narrow grid grid--profile">
                    <div class="card profile-card">
                        <div class="avatar">
                            {move || match avatar_url() {
                                Some(url) => view! { <img src=url alt=display_name()/> }.into_any(),
                                None => view! {
                                    <span class="avatar__fallback">{avatar_initial(&display_name(), &email())}</span>
                                }
                                .into_any(),
                            }}
                        </div>
                        <h2 class="card__title">{move || display_name_or_anonymous(&display_name()).to_owned()}</h2>
                        <p class="muted">{email}</p>
                        <ul class="profile-card__facts">
                            <li>{email}</li>
                            <li>{move || joined_label(profile.get().persisted.as_ref())}</li>
                            <li>{move || short_user_id(&user_id())}</li>
                        </ul>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Edit Profile"</h2>
                        <p class="muted">"Update your profile information and preferences."</p>
                        <label class="field">
                            <span>"Display Name"</span>
                            <input
                                id="displayName"
                                class="input"
                                placeholder="Enter your display name"
                                prop:value=display_name
                                on:input=move |ev| profile.update(|p| p.draft.display_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Bio"</span>
                            <textarea
                                id="bio"
                                class="input"
                                rows="4"
                                placeholder="Tell us about yourself..."
                                prop:value=move || profile.get().draft.bio
                                on:input=move |ev| profile.update(|p| p.draft.bio = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <hr/>
                        <div class="row row--between">
                            <div>
                                <h4>"Account Information"</h4>
                                <p class="muted">"Email and account settings cannot be changed here."</p>
                            </div>
                            <a href="/settings" class="btn btn--outline">"Account Settings"</a>
                        </div>
                        <div class="row">
                            <button
                                class="btn btn--primary btn--grow"
                                disabled=move || profile.get().save_disabled()
                                on:click=on_save
                            >
                                {move || profile.get().save_label()}
                            </button>
                            <button class="btn btn--outline" on:click=move |_| profile.update(ProfileState::reset_draft)>
                                "Reset"
                            </button>
                        </div>
                    </div>
                </main>
            </Show>
        </div>
    }
}
