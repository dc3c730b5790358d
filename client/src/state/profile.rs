//! Profile page state: persisted row plus a separate edit buffer.
//!
//! DESIGN
//! ======
//! The inputs bind to `draft`, never to `persisted`. A fetch overwrites both;
//! a failed save touches neither, so whatever the user typed stays visible.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Profile, ProfileUpdate};

/// Edit buffer for the profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub display_name: String,
    pub bio: String,
}

impl ProfileDraft {
    /// Buffer contents for `profile`, empty strings when absent.
    #[must_use]
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        Self {
            display_name: profile.and_then(|p| p.display_name.clone()).unwrap_or_default(),
            bio: profile.and_then(|p| p.bio.clone()).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate { display_name: self.display_name.clone(), bio: self.bio.clone() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub persisted: Option<Profile>,
    pub draft: ProfileDraft,
    pub loading: bool,
    pub saving: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { persisted: None, draft: ProfileDraft::default(), loading: true, saving: false }
    }
}

impl ProfileState {
    /// Settle a fetch. `None` is "no profile yet".
    pub fn apply_fetch(&mut self, profile: Option<Profile>) {
        self.draft = ProfileDraft::from_profile(profile.as_ref());
        self.persisted = profile;
        self.loading = false;
    }

    /// Settle a failed fetch; the form stays empty.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Copy persisted values back into the buffer.
    pub fn reset_draft(&mut self) {
        self.draft = ProfileDraft::from_profile(self.persisted.as_ref());
    }

    /// Mark a save as started; returns the body to send, or `None` when one is already running.
    pub fn begin_save(&mut self) -> Option<ProfileUpdate> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.draft.to_update())
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    /// Whether the Save button is disabled.
    #[must_use]
    pub fn save_disabled(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn save_label(&self) -> &'static str {
        if self.saving { "Saving..." } else { "Save Changes" }
    }
}
