use std::sync::Arc;

use axum::http::StatusCode;

use super::*;
use crate::routes::error::{DATABASE_ERROR, INVALID_REQUEST, NOT_FOUND};
use crate::state::test_helpers::{self, FailingProfileStore};

fn details_body(name: &str, bio: &str) -> Json<ProfileDetails> {
    Json(ProfileDetails { display_name: Some(name.into()), bio: Some(bio.into()), avatar_url: None })
}

fn prefs_body(value: serde_json::Value) -> Json<PreferencesBody> {
    Json(PreferencesBody { preferences: value })
}

#[tokio::test]
async fn get_profile_without_row_is_not_found() {
    let (state, _store) = test_helpers::test_app_state();
    let err = get_profile(State(state), test_helpers::auth_user("a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.code, NOT_FOUND);
}

#[tokio::test]
async fn put_then_get_profile_returns_saved_row() {
    let (state, _store) = test_helpers::test_app_state();
    let auth = test_helpers::auth_user("a@example.com");
    let user_id = auth.user.id;

    let Json(saved) = put_profile(State(state.clone()), test_helpers::auth_user_with_id(user_id), details_body("Ada", "hi"))
        .await
        .unwrap();
    let Json(fetched) = get_profile(State(state), auth).await.unwrap();

    assert_eq!(saved, fetched);
    assert_eq!(fetched.user_id, user_id);
    assert_eq!(fetched.display_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn profiles_are_scoped_to_session_user() {
    let (state, _store) = test_helpers::test_app_state();
    put_profile(State(state.clone()), test_helpers::auth_user("a@example.com"), details_body("Ada", ""))
        .await
        .unwrap();

    let err = get_profile(State(state), test_helpers::auth_user("b@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code, NOT_FOUND);
}

#[tokio::test]
async fn put_profile_rejects_oversized_name() {
    let (state, store) = test_helpers::test_app_state();
    let long = "n".repeat(crate::services::profile::MAX_DISPLAY_NAME_CHARS + 1);
    let err = put_profile(State(state), test_helpers::auth_user("a@example.com"), details_body(&long, ""))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.code, INVALID_REQUEST);
    assert_eq!(store.writes.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn get_preferences_without_row_is_not_found() {
    let (state, _store) = test_helpers::test_app_state();
    let err = get_preferences(State(state), test_helpers::auth_user("a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code, NOT_FOUND);
}

#[tokio::test]
async fn get_preferences_on_profile_without_blob_is_null() {
    let (state, _store) = test_helpers::test_app_state();
    let auth = test_helpers::auth_user("a@example.com");
    let user_id = auth.user.id;
    put_profile(State(state.clone()), test_helpers::auth_user_with_id(user_id), details_body("Ada", ""))
        .await
        .unwrap();

    let Json(resp) = get_preferences(State(state), auth).await.unwrap();
    assert_eq!(resp, PreferencesResponse { preferences: None });
}

#[tokio::test]
async fn put_preferences_stores_whole_blob() {
    let (state, _store) = test_helpers::test_app_state();
    let auth = test_helpers::auth_user("a@example.com");
    let user_id = auth.user.id;
    let blob = serde_json::json!({"theme": "dark", "notifications": false, "autoSave": false, "language": "es"});

    put_preferences(State(state.clone()), test_helpers::auth_user_with_id(user_id), prefs_body(blob.clone()))
        .await
        .unwrap();
    let Json(resp) = get_preferences(State(state), auth).await.unwrap();

    assert_eq!(resp.preferences, Some(blob));
}

#[tokio::test]
async fn last_preferences_write_wins() {
    let (state, _store) = test_helpers::test_app_state();
    let user_id = uuid::Uuid::new_v4();

    let first = serde_json::json!({"theme": "system", "notifications": false, "autoSave": true, "language": "en"});
    let second = serde_json::json!({"theme": "system", "notifications": false, "autoSave": false, "language": "en"});
    for blob in [first, second.clone()] {
        put_preferences(State(state.clone()), test_helpers::auth_user_with_id(user_id), prefs_body(blob))
            .await
            .unwrap();
    }

    let Json(resp) = get_preferences(State(state), test_helpers::auth_user_with_id(user_id))
        .await
        .unwrap();
    assert_eq!(resp.preferences, Some(second));
}

#[tokio::test]
async fn put_preferences_rejects_non_object() {
    let (state, _store) = test_helpers::test_app_state();
    let err = put_preferences(State(state), test_helpers::auth_user("a@example.com"), prefs_body(serde_json::json!("dark")))
        .await
        .unwrap_err();
    assert_eq!(err.code, INVALID_REQUEST);
}

#[tokio::test]
async fn store_failure_maps_to_database_error() {
    let state = test_helpers::test_app_state_with(Arc::new(FailingProfileStore));
    let err = get_profile(State(state), test_helpers::auth_user("a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code, DATABASE_ERROR);
}
