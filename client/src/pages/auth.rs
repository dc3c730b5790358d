//! Sign-in page: email + access-code auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for anonymous visitors; protected routes redirect here. A
//! successful verification settles the shared auth state and opens the editor.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, AuthStatus};

/// Route opened after sign-in.
pub const AFTER_SIGN_IN_ROUTE: &str = "/editor";

fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.is_empty() {
        return Err("Enter both email and 6-char code.");
    }
    Ok((email.to_owned(), code.to_owned()))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    // Signed-in visitors skip straight to the editor.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        if auth.get().status() == AuthStatus::Authenticated {
            navigate_signed_in(AFTER_SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_email_login_code(&email_value).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set("Code sent. Check your email for a 6-character code.".to_owned());
                }
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email_login_code(&email_value, &code_value).await {
                Ok(()) => {
                    let user = crate::net::api::fetch_current_user().await;
                    auth.update(|a| a.settle(user));
                    busy.set(false);
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">
                    <span class="brand-mark"></span>
                    <span>"ImagePro"</span>
                </a>
                <p class="auth-card__subtitle">"Sign in with an email access code"</p>
                <form class="auth-form" on:submit=on_request_code>
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send 6-char Code"
                    </button>
                </form>
                <form class="auth-form" on:submit=on_verify_code>
                    <input
                        class="input input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In With Code"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="auth-message auth-message--code">
                        "Code: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
