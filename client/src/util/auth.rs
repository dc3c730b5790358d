//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! Session lookup and sign-out also live here so every page settles and
//! clears the shared `AuthState` the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, AuthStatus};

/// Where anonymous visitors of protected routes are sent.
pub const AUTH_ROUTE: &str = "/auth";

/// True once auth has settled without a user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.status() == AuthStatus::Anonymous
}

/// Redirect to `/auth` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Look up the session cookie's user and settle `auth`.
pub fn refresh_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| a.settle(user));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Where sign-out lands.
pub const SIGNED_OUT_ROUTE: &str = "/";

/// Drop the user and hand off to `redirect`.
///
/// `auth` is left in `Loading` rather than `Anonymous`, so a mounted
/// `AuthGate` keeps its spinner instead of racing the redirect to `/auth`.
pub fn complete_sign_out<R>(auth: RwSignal<AuthState>, redirect: R)
where
    R: FnOnce(&str),
{
    auth.update(AuthState::begin_sign_out);
    redirect(SIGNED_OUT_ROUTE);
}

/// Full page load to `href`. Also resets every App-level signal.
#[cfg(feature = "hydrate")]
fn hard_redirect(href: &str) {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.location().set_href(href) {
            log::warn!("sign-out redirect failed: {e:?}");
        }
    }
}

/// End the session and reload at `/`.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        complete_sign_out(auth, hard_redirect);
    });
    #[cfg(not(feature = "hydrate"))]
    complete_sign_out(auth, |_| {});
}
