//! User preferences and the coalescing preferences writer.
//!
//! DESIGN
//! ======
//! Stored preferences are a free-form JSON object. Reading is lenient: each
//! known key is taken from the stored object when it has the right shape and
//! falls back to its default otherwise, so a malformed blob never blocks the
//! settings page. Every fallback is logged.
//!
//! WRITE PATH
//! ==========
//! `PreferencesState` is a pure state machine driven by the settings page:
//!
//! - `apply` records a control change and returns a generation number. The
//!   page arms a debounce timer tagged with that generation.
//! - `take_write(generation)` is called when a timer fires. Stale timers, an
//!   unchanged snapshot, or a write already in flight yield `None`; otherwise
//!   the full current snapshot is returned and marked in flight.
//! - `finish_write(ok)` settles the in-flight write. When the user changed
//!   something while it was running, the newest snapshot comes back as an
//!   immediate follow-up write. A failure is never retried on its own.
//!
//! At most one write is in flight and every write carries a whole snapshot.
//!
//! OWNERSHIP
//! =========
//! `App` holds the only `PreferencesState` so a debounced write outlives the
//! settings page. The state is tagged with the user it was loaded for;
//! `sync_user` resets it on sign-in changes and fetch results for any other
//! user are dropped.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde_json::Value;

/// Debounce window between the latest control change and the write.
pub const WRITE_DEBOUNCE_MS: u32 = 400;

const THEME_KEY: &str = "theme";
const NOTIFICATIONS_KEY: &str = "notifications";
const AUTO_SAVE_KEY: &str = "autoSave";
const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Fr];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == raw)
    }
}

/// The typed preferences snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub notifications: bool,
    pub auto_save: bool,
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { theme: Theme::System, notifications: true, auto_save: true, language: Language::En }
    }
}

impl Preferences {
    /// Wire form stored in the `preferences` column.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            THEME_KEY: self.theme.as_str(),
            NOTIFICATIONS_KEY: self.notifications,
            AUTO_SAVE_KEY: self.auto_save,
            LANGUAGE_KEY: self.language.as_str(),
        })
    }

    #[must_use]
    pub fn with(mut self, change: PreferenceChange) -> Self {
        match change {
            PreferenceChange::Theme(theme) => self.theme = theme,
            PreferenceChange::Notifications(on) => self.notifications = on,
            PreferenceChange::AutoSave(on) => self.auto_save = on,
            PreferenceChange::Language(language) => self.language = language,
        }
        self
    }
}

/// A single control change on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(Theme),
    Notifications(bool),
    AutoSave(bool),
    Language(Language),
}

fn warn_fallback(key: &str, raw: &Value) {
    log::warn!("stored preference {key}={raw} is not valid; using default");
}

fn merged_enum<T: Copy>(obj: &serde_json::Map<String, Value>, key: &str, default: T, parse: fn(&str) -> Option<T>) -> T {
    match obj.get(key) {
        None => default,
        Some(raw) => match raw.as_str().and_then(parse) {
            Some(v) => v,
            None => {
                warn_fallback(key, raw);
                default
            }
        },
    }
}

fn merged_bool(obj: &serde_json::Map<String, Value>, key: &str, default: bool) -> bool {
    match obj.get(key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(raw) => {
            warn_fallback(key, raw);
            default
        }
    }
}

/// Shallow-merge a stored blob over the defaults, key by key.
#[must_use]
pub fn merge_over_defaults(stored: Option<&Value>) -> Preferences {
    let defaults = Preferences::default();
    let obj = match stored {
        None | Some(Value::Null) => return defaults,
        Some(Value::Object(obj)) => obj,
        Some(other) => {
            log::warn!("stored preferences are not an object ({other}); using defaults");
            return defaults;
        }
    };

    for key in obj.keys() {
        if ![THEME_KEY, NOTIFICATIONS_KEY, AUTO_SAVE_KEY, LANGUAGE_KEY].contains(&key.as_str()) {
            log::debug!("ignoring unknown stored preference {key}");
        }
    }

    Preferences {
        theme: merged_enum(obj, THEME_KEY, defaults.theme, Theme::parse),
        notifications: merged_bool(obj, NOTIFICATIONS_KEY, defaults.notifications),
        auto_save: merged_bool(obj, AUTO_SAVE_KEY, defaults.auto_save),
        language: merged_enum(obj, LANGUAGE_KEY, defaults.language, Language::parse),
    }
}

/// Preferences of the signed-in user plus writer bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferencesState {
    /// User id the snapshot belongs to.
    owner: Option<String>,
    /// What the controls show.
    pub current: Preferences,
    /// Last snapshot the store confirmed (or the fetched one).
    persisted: Preferences,
    in_flight: Option<Preferences>,
    /// The last write failed.
    pub error: bool,
    /// Initial fetch has not settled.
    pub loading: bool,
    generation: u64,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self {
            owner: None,
            current: Preferences::default(),
            persisted: Preferences::default(),
            in_flight: None,
            error: false,
            loading: true,
            generation: 0,
        }
    }
}

impl PreferencesState {
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Rebind to `user_id`. Returns true when the user changed, in which case
    /// everything is reset and pending debounce timers and in-flight writes
    /// of the previous user are orphaned.
    pub fn sync_user(&mut self, user_id: Option<&str>) -> bool {
        if self.owner.as_deref() == user_id {
            return false;
        }
        *self = Self { owner: user_id.map(ToOwned::to_owned), generation: self.generation + 1, ..Self::default() };
        true
    }

    /// Settle the fetch started for `user_id`. Returns false (and changes
    /// nothing) when another user has signed in since.
    pub fn apply_fetch_for(&mut self, user_id: &str, stored: Option<&Value>) -> bool {
        if self.owner() != Some(user_id) {
            return false;
        }
        self.apply_fetch(stored);
        true
    }

    /// Failed-fetch counterpart of [`PreferencesState::apply_fetch_for`].
    pub fn fetch_failed_for(&mut self, user_id: &str) -> bool {
        if self.owner() != Some(user_id) {
            return false;
        }
        self.fetch_failed();
        true
    }

    /// Settle the initial fetch. `None` keeps the defaults.
    pub fn apply_fetch(&mut self, stored: Option<&Value>) {
        let merged = merge_over_defaults(stored);
        self.current = merged;
        self.persisted = merged;
        self.loading = false;
    }

    /// Settle a failed initial fetch; defaults stay in place.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Record a control change; returns the generation to tag the debounce timer with.
    pub fn apply(&mut self, change: PreferenceChange) -> u64 {
        self.current = self.current.with(change);
        self.generation += 1;
        self.generation
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.persisted
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claim the snapshot to write when the debounce timer for `generation` fires.
    pub fn take_write(&mut self, generation: u64) -> Option<Preferences> {
        if generation != self.generation || self.in_flight.is_some() || !self.is_dirty() {
            return None;
        }
        self.in_flight = Some(self.current);
        self.in_flight
    }

    /// Settle the in-flight write; returns a follow-up snapshot to write now, if any.
    pub fn finish_write(&mut self, ok: bool) -> Option<Preferences> {
        let attempted = self.in_flight.take()?;
        if ok {
            self.persisted = attempted;
            self.error = false;
        } else {
            self.error = true;
        }
        if self.current != attempted && self.is_dirty() {
            self.in_flight = Some(self.current);
            return self.in_flight;
        }
        None
    }
}
