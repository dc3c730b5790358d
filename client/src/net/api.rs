//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Profile calls return `Result<_, ApiError>`. A `not_found` code is folded
//! into `Ok(None)` by the fetch helpers, so callers only ever see real
//! failures in the error branch.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorBody, Profile, ProfileUpdate, User};
#[cfg(feature = "hydrate")]
use super::types::PreferencesEnvelope;

pub const NOT_FOUND_CODE: &str = "not_found";
const NETWORK_ERROR_CODE: &str = "network_error";
const UNEXPECTED_CODE: &str = "unexpected";

/// How a failed call should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Expected absence; render defaults.
    NotFound,
    /// Network or store failure reported by the transport or the server.
    Remote,
    /// Anything else (undecodable body, unavailable environment).
    Unexpected,
}

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status, `0` when no response arrived.
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self { status: 0, code: NETWORK_ERROR_CODE.to_owned(), message: message.into() }
    }

    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self { status: 0, code: UNEXPECTED_CODE.to_owned(), message: message.into() }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self.code.as_str() {
            NOT_FOUND_CODE => FailureKind::NotFound,
            UNEXPECTED_CODE => FailureKind::Unexpected,
            _ => FailureKind::Remote,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            write!(f, "{}: {}", self.code, self.message)
        } else {
            write!(f, "{} ({}): {}", self.code, self.status, self.message)
        }
    }
}

/// Build an `ApiError` from a non-OK response. Bodies that are not a
/// `{code, message}` object still produce a usable error keyed by status.
#[must_use]
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { code, message }) => ApiError { status, code, message },
        Err(_) => ApiError {
            status,
            code: if status == 404 { NOT_FOUND_CODE.to_owned() } else { format!("http_{status}") },
            message: body.trim().to_owned(),
        },
    }
}

/// Fold a `not_found` failure into an empty success.
///
/// # Errors
///
/// Passes through every error other than `not_found`.
pub fn absent_on_not_found<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_code_failed_message(status: u16) -> String {
    format!("request code failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_code_failed_message(status: u16) -> String {
    format!("verify code failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::unexpected(e.to_string()))
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct RequestCodeResponse {
            ok: bool,
            code: Option<String>,
        }

        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        let body: RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with a non-OK status,
/// or the verification code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's profile row. `Ok(None)` when none was saved yet.
///
/// # Errors
///
/// Returns the transport or server error for anything but `not_found`.
pub async fn fetch_profile() -> Result<Option<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = match gloo_net::http::Request::get("/api/profile").send().await {
            Ok(resp) => read_json::<Profile>(resp).await,
            Err(e) => Err(ApiError::network(e.to_string())),
        };
        absent_on_not_found(result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unexpected("not available on server"))
    }
}

/// Upsert display name and bio.
///
/// # Errors
///
/// Returns the transport or server error.
pub async fn save_profile(update: &ProfileUpdate) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::put("/api/profile")
            .json(update)
            .map_err(|e| ApiError::unexpected(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::network(e.to_string()))?;
        read_json::<Profile>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(ApiError::unexpected("not available on server"))
    }
}

/// Fetch the stored preferences blob. `Ok(None)` when there is no profile
/// row or the row has no preferences.
///
/// # Errors
///
/// Returns the transport or server error for anything but `not_found`.
pub async fn fetch_preferences() -> Result<Option<serde_json::Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = match gloo_net::http::Request::get("/api/profile/preferences").send().await {
            Ok(resp) => read_json::<PreferencesEnvelope>(resp).await,
            Err(e) => Err(ApiError::network(e.to_string())),
        };
        Ok(absent_on_not_found(result)?.and_then(|env| env.preferences))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unexpected("not available on server"))
    }
}

/// Replace the stored preferences blob with `preferences`.
///
/// # Errors
///
/// Returns the transport or server error.
pub async fn save_preferences(preferences: &serde_json::Value) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = PreferencesEnvelope { preferences: Some(preferences.clone()) };
        let req = gloo_net::http::Request::put("/api/profile/preferences")
            .json(&body)
            .map_err(|e| ApiError::unexpected(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::network(e.to_string()))?;
        read_json::<Profile>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preferences;
        Err(ApiError::unexpected("not available on server"))
    }
}
