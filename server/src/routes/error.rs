//! JSON error bodies for API routes.
//!
//! Every failed API call answers with `{ "code": ..., "message": ... }`. The
//! client keys its behavior off `code`: `not_found` is an expected empty state,
//! everything else is a failure to report.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::services::email_auth::EmailAuthError;
use crate::services::profile::ProfileError;

pub const NOT_FOUND: &str = "not_found";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const INVALID_REQUEST: &str = "invalid_request";
pub const DATABASE_ERROR: &str = "database_error";
pub const DELIVERY_ERROR: &str = "delivery_error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, code: NOT_FOUND, message: message.into() }
    }

    #[must_use]
    pub fn unauthorized() -> Self {
        Self { status: StatusCode::UNAUTHORIZED, code: UNAUTHORIZED, message: "sign in required".into() }
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: INVALID_REQUEST, message: message.into() }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: DATABASE_ERROR, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "code": self.code, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::FieldTooLong { .. } | ProfileError::PreferencesNotObject => {
                Self::invalid_request(err.to_string())
            }
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "profile store failure");
                Self::database("profile store unavailable")
            }
        }
    }
}

impl From<EmailAuthError> for ApiError {
    fn from(err: EmailAuthError) -> Self {
        match err {
            EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode => Self::invalid_request(err.to_string()),
            EmailAuthError::VerificationFailed => {
                Self { status: StatusCode::UNAUTHORIZED, code: UNAUTHORIZED, message: err.to_string() }
            }
            EmailAuthError::Db(e) => {
                tracing::error!(error = %e, "email auth database failure");
                Self::database("auth store unavailable")
            }
            EmailAuthError::EmailDelivery(e) => {
                tracing::error!(error = %e, "access code delivery failed");
                Self { status: StatusCode::BAD_GATEWAY, code: DELIVERY_ERROR, message: "could not send email".into() }
            }
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
