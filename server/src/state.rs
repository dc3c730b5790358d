//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool (sessions, access codes), the profile store and
//! the parsed server config. Clone is cheap: every field is a pool handle or
//! an `Arc`.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::profile::{PgProfileStore, ProfileStore};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub profiles: Arc<dyn ProfileStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Production wiring: profiles live in the same Postgres pool.
    #[must_use]
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        let profiles = Arc::new(PgProfileStore::new(pool.clone()));
        Self::with_store(pool, profiles, config)
    }

    #[must_use]
    pub fn with_store(pool: PgPool, profiles: Arc<dyn ProfileStore>, config: ServerConfig) -> Self {
        Self { pool, profiles, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
