//! REST API error types
//!
//! Every error renders as a flat `{"error": <code>, "message": <text>}` body
//! with the matching HTTP status.

use sk_auth::AuthError;
use sk_core::CoreError;
use sk_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

pub const UNAUTHORIZED_CODE: &str = "unauthorized";
pub const RATE_LIMIT_CODE: &str = "rate_limit_exceeded";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";
pub const RATE_LIMIT_MESSAGE: &str = "Too many login attempts. Please try again later.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "unauthorized", "validation_error")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Offending field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparseable request (400)
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    /// Missing or rejected bearer token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Wrong email or password (401)
    #[error("Login failed: {message} {location}")]
    LoginFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Not found [{code}]: {message} {location}")]
    NotFound {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Login attempts exhausted for this client (429)
    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    /// Internal server error (500)
    #[error("Internal error [{code}]: {message} {location}")]
    Internal {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found(id: i64) -> Self {
        ApiError::NotFound {
            code: "user_not_found",
            message: format!("user {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Replace the code of a conflict or internal error with an
    /// endpoint-specific one (e.g. `registration_failed`).
    pub fn with_code(self, new_code: &'static str) -> Self {
        match self {
            ApiError::Conflict {
                message, location, ..
            } => ApiError::Conflict {
                code: new_code,
                message,
                location,
            },
            ApiError::Internal {
                message, location, ..
            } => ApiError::Internal {
                code: new_code,
                message,
                location,
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } | ApiError::LoginFailed { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = match self {
            ApiError::BadRequest { code, message, .. }
            | ApiError::NotFound { code, message, .. }
            | ApiError::Conflict { code, message, .. }
            | ApiError::Internal { code, message, .. } => ApiErrorBody {
                error: code.into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                error: "validation_error".into(),
                message,
                field: field.map(String::from),
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                error: UNAUTHORIZED_CODE.into(),
                message,
                field: None,
            },
            ApiError::LoginFailed { message, .. } => ApiErrorBody {
                error: "login_failed".into(),
                message,
                field: None,
            },
            ApiError::RateLimited { .. } => ApiErrorBody {
                error: RATE_LIMIT_CODE.into(),
                message: RATE_LIMIT_MESSAGE.into(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message(),
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::EmailTaken { .. } => ApiError::Conflict {
                code: "email_taken",
                message: "email is already registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                error!("Database error: {}", other);
                ApiError::Internal {
                    code: "internal_error",
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert auth errors to API errors. Token failures are not distinguished.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials { .. } => ApiError::LoginFailed {
                message: "invalid email or password".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            e if e.is_unauthenticated() => ApiError::Unauthorized {
                message: INVALID_TOKEN_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                error!("Auth error [{}]: {}", other.error_code(), other);
                ApiError::Internal {
                    code: "internal_error",
                    message: "Authentication failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
