//! Email access-code sign-in.
//!
//! DESIGN
//! ======
//! Requesting a code upserts the user and supersedes any live code for that
//! address, so at most one code per email can be redeemed. Only the sha256
//! digest is stored. Verification locks the newest live row, judges the
//! submission in Rust, and then either consumes the row or counts the miss.
//! The fifth miss burns the code.
//!
//! Expired and spent rows are removed by the housekeeping task.

use rand::Rng;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::EmailConfig;

const CODE_LEN: usize = 6;
/// Uppercase letters and digits without the look-alikes 0, 1, I and O.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;
const MAIL_SUBJECT: &str = "Your ImagePro sign-in code";
const MAIL_TEMPLATE: &str = include_str!("../../templates/access_code.html");

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

/// A well-formed plaintext access code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let code = (0..CODE_LEN)
            .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
            .collect();
        Self(code)
    }

    /// Accepts user input in any case with surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().to_ascii_uppercase();
        let well_formed = code.len() == CODE_LEN && code.bytes().all(|b| CODE_ALPHABET.contains(&b));
        well_formed.then_some(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Hex sha256, the only form that reaches the database.
    #[must_use]
    pub fn digest(&self) -> String {
        super::session::bytes_to_hex(&Sha256::digest(self.0.as_bytes()))
    }
}

/// Lowercased address with exactly one `@` and non-empty parts.
#[must_use]
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_ascii_lowercase();
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Some(email),
        _ => None,
    }
}

/// The newest unexpired, unconsumed code for an address.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct LiveCode {
    pub(crate) id: Uuid,
    pub(crate) code_hash: String,
    pub(crate) attempts: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Accept,
    /// Wrong code; `burn` when this miss exhausts the attempt budget.
    Reject { burn: bool },
}

pub(crate) fn judge(live: &LiveCode, submitted: &AccessCode) -> Verdict {
    if live.code_hash == submitted.digest() {
        Verdict::Accept
    } else {
        Verdict::Reject { burn: live.attempts + 1 >= MAX_FAILED_ATTEMPTS }
    }
}

/// Issue a fresh code for `email`, creating the user on first contact.
pub async fn request_access_code(pool: &PgPool, email: &str) -> Result<AccessCode, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = AccessCode::generate();

    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO users (email) VALUES ($1) ON CONFLICT (email) DO NOTHING")
        .bind(&email)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE email = $1 AND consumed_at IS NULL")
        .bind(&email)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO email_login_codes (email, code_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind(code.digest())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(code)
}

/// Redeem `code` for `email` and return the user id.
pub async fn verify_access_code(pool: &PgPool, email: &str, code: &str) -> Result<Uuid, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let submitted = AccessCode::parse(code).ok_or(EmailAuthError::InvalidCode)?;

    let mut tx = pool.begin().await?;
    let live: Option<LiveCode> = sqlx::query_as(
        r"SELECT id, code_hash, attempts
          FROM email_login_codes
          WHERE email = $1 AND consumed_at IS NULL AND expires_at > now()
          ORDER BY created_at DESC
          LIMIT 1
          FOR UPDATE",
    )
    .bind(&email)
    .fetch_optional(&mut *tx)
    .await?;
    let Some(live) = live else {
        return Err(EmailAuthError::VerificationFailed);
    };

    match judge(&live, &submitted) {
        Verdict::Accept => {
            sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE id = $1")
                .bind(live.id)
                .execute(&mut *tx)
                .await?;
            let user_id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
                .bind(&email)
                .fetch_one(&mut *tx)
                .await?;
            tx.commit().await?;
            Ok(user_id)
        }
        Verdict::Reject { burn } => {
            sqlx::query(
                r"UPDATE email_login_codes
                  SET attempts = attempts + 1,
                      consumed_at = CASE WHEN $2 THEN now() ELSE NULL END
                  WHERE id = $1",
            )
            .bind(live.id)
            .bind(burn)
            .execute(&mut *tx)
            .await?;
            tx.commit().await?;
            if burn {
                tracing::info!(%email, "access code burned after repeated misses");
            }
            Err(EmailAuthError::VerificationFailed)
        }
    }
}

/// Delete codes that expired or were already consumed. Returns the row count.
pub async fn prune_stale_codes(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let done = sqlx::query("DELETE FROM email_login_codes WHERE expires_at <= now() OR consumed_at IS NOT NULL")
        .execute(pool)
        .await?;
    Ok(done.rows_affected())
}

#[must_use]
pub fn render_access_code_email(email: &str, code: &AccessCode) -> String {
    MAIL_TEMPLATE.replace("{{EMAIL}}", email).replace("{{CODE}}", code.as_str())
}

/// Send `code` to `to` through Resend.
pub async fn deliver_access_code(config: &EmailConfig, to: &str, code: &AccessCode) -> Result<(), EmailAuthError> {
    let message = CreateEmailBaseOptions::new(&config.from, [to], MAIL_SUBJECT)
        .with_html(&render_access_code_email(to, code));
    Resend::new(&config.api_key)
        .emails
        .send(message)
        .await
        .map(|_| ())
        .map_err(|e| EmailAuthError::EmailDelivery(e.to_string()))
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
