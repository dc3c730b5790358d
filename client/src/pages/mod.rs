//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their body in `AuthGate`.

pub mod about;
pub mod auth;
pub mod editor;
pub mod profile;
pub mod settings;
