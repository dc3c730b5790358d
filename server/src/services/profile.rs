//! Profile store: the `profiles` table behind `/api/profile`.
//!
//! DESIGN
//! ======
//! One row per user, keyed by the unique `user_id`. Rows are created lazily by
//! the first write (upsert), never deleted by the app. Two independent write
//! paths exist: profile details (`display_name`, `bio`, `avatar_url`) and the
//! `preferences` blob. Each upsert touches only its own columns so a settings
//! change never clobbers an edited bio and vice versa.
//!
//! The store sits behind the `ProfileStore` trait so route handlers can be
//! exercised against an in-memory implementation in tests.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub const MAX_DISPLAY_NAME_CHARS: usize = 100;
pub const MAX_BIO_CHARS: usize = 1000;

// =============================================================================
// TYPES
// =============================================================================

/// A persisted profile row. Timestamps are RFC 3339 UTC strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferences: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Editable profile fields written by the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ProfileDetails {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("preferences must be a JSON object")]
    PreferencesNotObject,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ProfileDetails {
    /// Check field limits before hitting the store.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::FieldTooLong`] for the first oversized field.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_len("display_name", self.display_name.as_deref(), MAX_DISPLAY_NAME_CHARS)?;
        check_len("bio", self.bio.as_deref(), MAX_BIO_CHARS)?;
        Ok(())
    }
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ProfileError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ProfileError::FieldTooLong { field, max }),
        _ => Ok(()),
    }
}

/// The stored blob must be an object; its keys are not interpreted here.
///
/// # Errors
///
/// Returns [`ProfileError::PreferencesNotObject`] for arrays, scalars and null.
pub fn validate_preferences(value: &serde_json::Value) -> Result<(), ProfileError> {
    if value.is_object() { Ok(()) } else { Err(ProfileError::PreferencesNotObject) }
}

// =============================================================================
// STORE
// =============================================================================

/// Row storage for profiles. Implementations must provide upsert semantics
/// keyed by `user_id` and leave columns outside the write untouched.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for `user_id`, `None` if the user never saved one.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRow>, ProfileError>;

    /// Insert or update display name, bio and avatar.
    async fn upsert_details(&self, user_id: Uuid, details: &ProfileDetails) -> Result<ProfileRow, ProfileError>;

    /// Insert or update the preferences blob.
    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        preferences: &serde_json::Value,
    ) -> Result<ProfileRow, ProfileError>;
}

const PROFILE_COLUMNS: &str = r#"id, user_id, display_name, bio, avatar_url, preferences,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at"#;

/// `PostgreSQL`-backed store.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_profile(row: &PgRow) -> ProfileRow {
    ProfileRow {
        id: row.get("id"),
        user_id: row.get("user_id"),
        display_name: row.get("display_name"),
        bio: row.get("bio"),
        avatar_url: row.get("avatar_url"),
        preferences: row.get("preferences"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait::async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRow>, ProfileError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1");
        let row = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_profile))
    }

    async fn upsert_details(&self, user_id: Uuid, details: &ProfileDetails) -> Result<ProfileRow, ProfileError> {
        let sql = format!(
            "INSERT INTO profiles (user_id, display_name, bio, avatar_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE SET
                 display_name = EXCLUDED.display_name,
                 bio = EXCLUDED.bio,
                 avatar_url = COALESCE(EXCLUDED.avatar_url, profiles.avatar_url),
                 updated_at = now()
             RETURNING {PROFILE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(&details.display_name)
            .bind(&details.bio)
            .bind(&details.avatar_url)
            .fetch_one(&self.pool)
            .await?;
        Ok(row_to_profile(&row))
    }

    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        preferences: &serde_json::Value,
    ) -> Result<ProfileRow, ProfileError> {
        let sql = format!(
            "INSERT INTO profiles (user_id, preferences)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET
                 preferences = EXCLUDED.preferences,
                 updated_at = now()
             RETURNING {PROFILE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(preferences)
            .fetch_one(&self.pool)
            .await?;
        Ok(row_to_profile(&row))
    }
}

// =============================================================================
// SERVICE ENTRY POINTS
// =============================================================================

/// Validate and persist profile details.
///
/// # Errors
///
/// Returns validation or store errors.
pub async fn save_details(
    store: &dyn ProfileStore,
    user_id: Uuid,
    details: &ProfileDetails,
) -> Result<ProfileRow, ProfileError> {
    details.validate()?;
    store.upsert_details(user_id, details).await
}

/// Validate and persist the preferences blob.
///
/// # Errors
///
/// Returns validation or store errors.
pub async fn save_preferences(
    store: &dyn ProfileStore,
    user_id: Uuid,
    preferences: &serde_json::Value,
) -> Result<ProfileRow, ProfileError> {
    validate_preferences(preferences)?;
    store.upsert_preferences(user_id, preferences).await
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
