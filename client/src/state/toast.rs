//! Transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<ToastState>`; pages push into it and
//! `components::toast_host` renders and auto-dismisses entries.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::net::api::{ApiError, FailureKind};

/// How long a toast stays up before auto-dismiss.
pub const TOAST_DISMISS_MS: u32 = 5_000;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: title.to_owned(), description: description.to_owned(), variant });
        id
    }

    pub fn success(&mut self, description: &str) -> u64 {
        self.push("Success", description, ToastVariant::Success)
    }

    pub fn destructive(&mut self, description: &str) -> u64 {
        self.push("Error", description, ToastVariant::Destructive)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Toast text for a failed call: `remote` for network/store failures,
/// the generic message for anything unexpected.
#[must_use]
pub fn failure_message(err: &ApiError, remote: &'static str) -> &'static str {
    match err.kind() {
        FailureKind::Unexpected => UNEXPECTED_ERROR_MESSAGE,
        FailureKind::NotFound | FailureKind::Remote => remote,
    }
}
