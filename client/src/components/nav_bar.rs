//! Top navigation for the profile and settings pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

/// Back-to-home brand link, one cross link, and Sign Out.
#[component]
pub fn NavBar(link_href: &'static str, link_label: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let on_sign_out = move |_| sign_out(auth);

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                <span class="nav-bar__back">"←"</span>
                <span class="brand-mark"></span>
                <span class="nav-bar__name">"ImagePro"</span>
            </a>
            <div class="nav-bar__actions">
                <a href=link_href class="btn btn--ghost">{link_label}</a>
                <button class="btn btn--outline" on:click=on_sign_out>"Sign Out"</button>
            </div>
        </nav>
    }
}
