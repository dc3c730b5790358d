use super::*;

#[test]
fn profile_deserializes_server_row() {
    let raw = r#"{
        "id": "11111111-1111-1111-1111-111111111111",
        "user_id": "22222222-2222-2222-2222-222222222222",
        "display_name": "Ada",
        "bio": null,
        "avatar_url": null,
        "preferences": {"theme": "dark"},
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:04:05Z"
    }"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.display_name.as_deref(), Some("Ada"));
    assert!(profile.bio.is_none());
    assert_eq!(profile.preferences, Some(serde_json::json!({"theme": "dark"})));
}

#[test]
fn profile_tolerates_missing_optional_columns() {
    let raw = r#"{"id":"a","user_id":"b","created_at":"t","updated_at":"t"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert!(profile.display_name.is_none());
    assert!(profile.preferences.is_none());
}

#[test]
fn profile_update_serializes_both_fields() {
    let body = ProfileUpdate { display_name: String::new(), bio: "hello".into() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"display_name": "", "bio": "hello"}));
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"code":"not_found"}"#).unwrap();
    assert_eq!(body.code, "not_found");
    assert!(body.message.is_empty());
}
