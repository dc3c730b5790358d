use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_id_and_email_only() {
    let user = SessionUser { id: Uuid::nil(), email: "ada@example.com".into() };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(2));
}
