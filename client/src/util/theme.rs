//! Theme application.
//!
//! Applies the `theme` preference as a `data-theme` attribute on the
//! `<html>` element, resolving `system` through `prefers-color-scheme`.
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::preferences::Theme;

/// Attribute value for `theme` given the system dark-mode preference.
#[must_use]
pub fn resolve(theme: Theme, system_prefers_dark: bool) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
        Theme::System if system_prefers_dark => "dark",
        Theme::System => "light",
    }
}

/// Whether the browser reports a dark color-scheme preference.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    let value = resolve(theme, system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", value) {
                log::warn!("failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
