//! Housekeeping service: background sweep of dead auth rows.
//!
//! DESIGN
//! ======
//! Sessions and access codes are only ever filtered by `expires_at` on read,
//! so expired rows would accumulate forever. A background task deletes them
//! (plus consumed codes) once per `SESSION_PRUNE_INTERVAL_SECS`.
//!
//! ERROR HANDLING
//! ==============
//! A failed sweep is logged and retried on the next tick. The task never
//! exits on its own.

#[cfg(test)]
#[path = "housekeeping_test.rs"]
mod tests;

use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{email_auth, session};

/// Rows removed by one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub sessions: u64,
    pub codes: u64,
}

/// Delete expired sessions and expired or consumed access codes.
pub async fn sweep(pool: &PgPool) -> Result<SweepReport, sqlx::Error> {
    let sessions = session::prune_expired_sessions(pool).await?;
    let codes = email_auth::prune_stale_codes(pool).await?;
    Ok(SweepReport { sessions, codes })
}

/// Spawn the sweep loop. Returns a handle for shutdown.
pub fn spawn_housekeeping_task(pool: PgPool, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs(), "auth housekeeping configured");
    tokio::spawn(async move {
        loop {
            match sweep(&pool).await {
                Ok(report) if report == SweepReport::default() => debug!("housekeeping: nothing to prune"),
                Ok(report) => info!(sessions = report.sessions, codes = report.codes, "housekeeping: pruned"),
                Err(e) => warn!(error = %e, "housekeeping sweep failed"),
            }
            tokio::time::sleep(interval).await;
        }
    })
}
