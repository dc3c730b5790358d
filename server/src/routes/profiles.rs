//! Profile routes: the caller's own profile row and preferences blob.
//!
//! All handlers act on the session user only; there is no way to read or
//! write another user's row.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::auth::AuthUser;
use super::error::ApiError;
use crate::services::profile::{self, ProfileDetails, ProfileRow};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct PreferencesResponse {
    pub preferences: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct PreferencesBody {
    pub preferences: serde_json::Value,
}

/// `GET /api/profile`: the caller's profile, or 404 `not_found`.
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<ProfileRow>, ApiError> {
    state
        .profiles
        .find_by_user(auth.user.id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("no profile for user"))
}

/// `PUT /api/profile`: upsert display name, bio and avatar.
pub async fn put_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProfileDetails>,
) -> Result<Json<ProfileRow>, ApiError> {
    let row = profile::save_details(state.profiles.as_ref(), auth.user.id, &body).await?;
    tracing::debug!(user_id = %auth.user.id, "profile details saved");
    Ok(Json(row))
}

/// `GET /api/profile/preferences`: the stored blob, unmerged.
pub async fn get_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let row = state
        .profiles
        .find_by_user(auth.user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("no profile for user"))?;
    Ok(Json(PreferencesResponse { preferences: row.preferences }))
}

/// `PUT /api/profile/preferences`: replace the whole preferences blob.
pub async fn put_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<PreferencesBody>,
) -> Result<Json<ProfileRow>, ApiError> {
    let row = profile::save_preferences(state.profiles.as_ref(), auth.user.id, &body.preferences).await?;
    tracing::debug!(user_id = %auth.user.id, "preferences saved");
    Ok(Json(row))
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
