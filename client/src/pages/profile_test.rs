use super::*;

fn row(created_at: &str) -> Profile {
    Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        display_name: None,
        bio: None,
        avatar_url: None,
        preferences: None,
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
    }
}

#[test]
fn avatar_initial_prefers_display_name() {
    assert_eq!(avatar_initial("ada", "grace@example.com"), "A");
}

#[test]
fn avatar_initial_falls_back_to_email() {
    assert_eq!(avatar_initial("", "grace@example.com"), "G");
    assert_eq!(avatar_initial("", ""), "");
}

#[test]
fn empty_display_name_is_anonymous() {
    assert_eq!(display_name_or_anonymous(""), "Anonymous User");
    assert_eq!(display_name_or_anonymous("Ada"), "Ada");
}

#[test]
fn joined_label_uses_created_date() {
    assert_eq!(joined_label(Some(&row("2026-03-14T09:26:53Z"))), "Joined 2026-03-14");
}

#[test]
fn joined_label_without_profile_is_recently() {
    assert_eq!(joined_label(None), "Joined Recently");
    assert_eq!(joined_label(Some(&row(""))), "Joined Recently");
}

#[test]
fn short_user_id_keeps_first_eight_chars() {
    assert_eq!(short_user_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "User ID: 0f8fad5b...");
    assert_eq!(short_user_id("abc"), "User ID: abc...");
}

#[test]
fn toast_messages() {
    assert_eq!(LOAD_FAILED_MESSAGE, "Failed to load profile data.");
    assert_eq!(SAVE_FAILED_MESSAGE, "Failed to update profile.");
    assert_eq!(SAVED_MESSAGE, "Profile updated successfully!");
}
