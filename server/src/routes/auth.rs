//! Auth routes: email access codes, session cookie, current user.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::error::ApiError;
use crate::services::{email_auth, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const SESSION_MAX_AGE_DAYS: i64 = 30;

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

pub(crate) fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::unauthorized());
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                ApiError::database("session store unavailable")
            })?
            .ok_or_else(ApiError::unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RequestCodeResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Decide what the request-code endpoint reveals. The plaintext code is only
/// returned when echo mode is on.
pub(crate) fn request_code_response(code: String, echo: bool) -> RequestCodeResponse {
    RequestCodeResponse { ok: true, code: echo.then_some(code) }
}

/// `POST /api/auth/email/request-code`: issue and deliver an access code.
pub async fn request_email_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeBody>,
) -> Result<Json<RequestCodeResponse>, ApiError> {
    let code = email_auth::request_access_code(&state.pool, &body.email).await?;
    let email = email_auth::normalize_email(&body.email).unwrap_or_default();

    match &state.config.email {
        Some(email_config) => email_auth::deliver_access_code(email_config, &email, &code).await?,
        None if state.config.echo_access_codes => {
            tracing::info!(%email, "email delivery not configured; echoing access code");
        }
        None => tracing::warn!(%email, "email delivery not configured; access code was not sent"),
    }

    Ok(Json(request_code_response(code.into_string(), state.config.echo_access_codes)))
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

/// `POST /api/auth/email/verify-code`: consume a code and start a session.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = email_auth::verify_access_code(&state.pool, &body.email, &body.code).await?;
    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        ApiError::database("failed to create session")
    })?;
    tracing::info!(%user_id, "session created");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(serde_json::json!({ "ok": true }))))
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }

    let jar = CookieJar::new().add(clear_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
