//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema
//! mirrored from the server's auth and profile routes.

pub mod api;
pub mod types;
