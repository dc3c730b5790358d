//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `profile`, `preferences`, etc.) so
//! individual components can depend on small focused models. Every model is
//! plain data; pages wrap them in `RwSignal`s.

pub mod auth;
pub mod editor;
pub mod preferences;
pub mod profile;
pub mod toast;
