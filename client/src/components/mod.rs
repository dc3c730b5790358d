//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the editor panes while reading/writing
//! shared state from Leptos context providers.

pub mod auth_gate;
pub mod image_canvas;
pub mod main_sidebar;
pub mod mini_toolbar;
pub mod nav_bar;
pub mod toast_host;
