//! Toast rendering and auto-dismiss.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DISMISS_MS;

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id);
}

/// Show a success toast.
pub fn toast_success(toasts: RwSignal<ToastState>, description: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.success(description));
    schedule_dismiss(toasts, id);
}

/// Show a destructive toast.
pub fn toast_error(toasts: RwSignal<ToastState>, description: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.destructive(description));
    schedule_dismiss(toasts, id);
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Success => "toast toast--success",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

/// Stack of active toasts, bottom-right.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.variant)>
                            <div class="toast__body">
                                <strong class="toast__title">{toast.title}</strong>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
