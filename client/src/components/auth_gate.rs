//! Guarded-route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `AuthGate`. While the session lookup
//! is pending it shows a spinner; once settled it either renders its children
//! or redirects to `/auth` without ever rendering them.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, AuthStatus};
use crate::util::auth::install_unauth_redirect;

/// What the gate shows for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateContent {
    Spinner,
    Children,
    /// Anonymous: nothing while the redirect runs.
    Empty,
}

#[must_use]
pub fn gate_content(state: &AuthState) -> GateContent {
    match state.status() {
        AuthStatus::Loading => GateContent::Spinner,
        AuthStatus::Authenticated => GateContent::Children,
        AuthStatus::Anonymous => GateContent::Empty,
    }
}

/// Full-page spinner with a caption.
#[component]
pub fn LoadingScreen(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">{label}</p>
        </div>
    }
}

/// Render `children` only for an authenticated session.
#[component]
pub fn AuthGate(
    /// Caption under the spinner while auth is loading.
    loading_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let content = Memo::new(move |_| gate_content(&auth.get()));

    move || match content.get() {
        GateContent::Children => children().into_any(),
        GateContent::Spinner => view! { <LoadingScreen label=loading_label/> }.into_any(),
        GateContent::Empty => ().into_any(),
    }
}
