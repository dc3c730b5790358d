//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `App` creates the single `RwSignal<AuthState>`
//! in the `Loading` state and provides it via context; nothing else constructs one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Settled view of the session, derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// `/api/auth/me` has not answered yet.
    Loading,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the session lookup completes.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Settle the lookup. `None` means anonymous.
    pub fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Forget the user while the page is being replaced. Stays `Loading`.
    pub fn begin_sign_out(&mut self) {
        self.user = None;
        self.loading = true;
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match (self.loading, &self.user) {
            (true, _) => AuthStatus::Loading,
            (false, Some(_)) => AuthStatus::Authenticated,
            (false, None) => AuthStatus::Anonymous,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
