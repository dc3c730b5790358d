use axum::extract::FromRequestParts;
use axum::http::Request;

use super::*;
use crate::routes::error::UNAUTHORIZED;
use crate::state::test_helpers;

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_and_scoped_to_root() {
    let cookie = session_cookie("abc".into(), false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::days(SESSION_MAX_AGE_DAYS)));
}

#[test]
fn session_cookie_respects_secure_flag() {
    assert_eq!(session_cookie("abc".into(), true).secure(), Some(true));
}

#[test]
fn clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie(true);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(true));
}

// =============================================================================
// request-code response
// =============================================================================

#[test]
fn request_code_response_hides_code_by_default() {
    let resp = request_code_response("ABC234".into(), false);
    assert_eq!(resp, RequestCodeResponse { ok: true, code: None });
    assert_eq!(serde_json::to_value(&resp).unwrap(), serde_json::json!({ "ok": true }));
}

#[test]
fn request_code_response_echoes_when_enabled() {
    let resp = request_code_response("ABC234".into(), true);
    assert_eq!(resp.code.as_deref(), Some("ABC234"));
}

// =============================================================================
// extractor
// =============================================================================

#[tokio::test]
async fn extractor_rejects_missing_cookie() {
    let (state, _store) = test_helpers::test_app_state();
    let (mut parts, ()) = Request::builder().uri("/api/auth/me").body(()).unwrap().into_parts();

    let err = AuthUser::from_request_parts(&mut parts, &state).await.err().expect("should reject");
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.code, UNAUTHORIZED);
}

#[tokio::test]
async fn extractor_rejects_empty_cookie_value() {
    let (state, _store) = test_helpers::test_app_state();
    let (mut parts, ()) = Request::builder()
        .uri("/api/auth/me")
        .header("cookie", format!("{COOKIE_NAME}="))
        .body(())
        .unwrap()
        .into_parts();

    let err = AuthUser::from_request_parts(&mut parts, &state).await.err().expect("should reject");
    assert_eq!(err.code, UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_session_user() {
    let auth = test_helpers::auth_user("ada@example.com");
    let expected = auth.user.clone();
    let Json(user) = me(auth).await;
    assert_eq!(user, expected);
}
