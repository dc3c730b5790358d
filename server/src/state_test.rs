use super::test_helpers::*;
use super::*;
use crate::services::profile::ProfileDetails;

#[tokio::test]
async fn test_state_shares_the_injected_store() {
    let (state, store) = test_app_state();
    let user_id = uuid::Uuid::new_v4();
    let details = ProfileDetails { display_name: Some("Ada".into()), ..ProfileDetails::default() };

    state.profiles.upsert_details(user_id, &details).await.unwrap();

    let found = store.find_by_user(user_id).await.unwrap().expect("row should exist");
    assert_eq!(found.display_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn config_is_shared_between_clones() {
    let (state, _store) = test_app_state();
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.config, &cloned.config));
    assert!(cloned.config.echo_access_codes);
}

#[tokio::test]
async fn memory_store_timestamps_advance_on_update() {
    let store = MemoryProfileStore::default();
    let user_id = uuid::Uuid::new_v4();
    let first = store
        .upsert_preferences(user_id, &serde_json::json!({"theme": "dark"}))
        .await
        .unwrap();
    let second = store
        .upsert_preferences(user_id, &serde_json::json!({"theme": "light"}))
        .await
        .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    assert_ne!(first.updated_at, second.updated_at);
}
