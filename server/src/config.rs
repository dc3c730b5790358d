//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (when present) and builds one `ServerConfig` before any
//! other startup work. Everything downstream receives typed values instead of
//! reading the environment ad hoc.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PRUNE_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_RESEND_FROM: &str = "ImagePro <no-reply@imagepro.local>";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Email delivery settings. Absent when `RESEND_API_KEY` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Return freshly issued access codes in the API response (local development).
    pub echo_access_codes: bool,
    /// Seconds between sweeps of expired sessions and spent access codes.
    pub prune_interval_secs: u64,
    pub email: Option<EmailConfig>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `COOKIE_SECURE`: default false
    /// - `AUTH_ECHO_CODES`: default false
    /// - `SESSION_PRUNE_INTERVAL_SECS`: default 3600, must be positive
    /// - `RESEND_API_KEY` / `RESEND_FROM`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let cookie_secure = bool_or("COOKIE_SECURE", lookup("COOKIE_SECURE"), false)?;
        let echo_access_codes = bool_or("AUTH_ECHO_CODES", lookup("AUTH_ECHO_CODES"), false)?;
        let prune_raw = lookup("SESSION_PRUNE_INTERVAL_SECS");
        let prune_interval_secs = parse_or("SESSION_PRUNE_INTERVAL_SECS", prune_raw.clone(), DEFAULT_PRUNE_INTERVAL_SECS)?;
        if prune_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_PRUNE_INTERVAL_SECS",
                value: prune_raw.unwrap_or_default(),
            });
        }

        let email = lookup("RESEND_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .map(|api_key| EmailConfig {
                api_key,
                from: lookup("RESEND_FROM").unwrap_or_else(|| DEFAULT_RESEND_FROM.to_owned()),
            });

        Ok(Self {
            database_url,
            port,
            db_max_connections,
            cookie_secure,
            echo_access_codes,
            prune_interval_secs,
            email,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn bool_or(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid { key, value }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
