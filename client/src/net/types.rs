//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field for field so serde
//! round-trips stay lossless. Ids are kept as strings on the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in identity returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email.
    pub email: String,
}

/// A row of the `profiles` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Raw stored preferences; interpreted by `state::preferences`.
    #[serde(default)]
    pub preferences: Option<serde_json::Value>,
    /// RFC 3339 UTC timestamp assigned by the server.
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `PUT /api/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub bio: String,
}

/// Body of `GET`/`PUT /api/profile/preferences`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferencesEnvelope {
    pub preferences: Option<serde_json::Value>,
}

/// Error body returned by every failing API call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: String,
}
