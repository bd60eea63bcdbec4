use crate::ApiError;
use crate::api::error::{INVALID_TOKEN_MESSAGE, RATE_LIMIT_MESSAGE};

use sk_auth::AuthError;
use sk_core::validate_name;
use sk_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let (status, json) = render(ApiError::user_not_found(7)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "user_not_found");
    assert_eq!(json["message"], "user 7 not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name must be between 2 and 100 characters".into(),
        field: Some("name"),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = render(ApiError::unauthorized("Token is required")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "unauthorized");
    assert_eq!(json["message"], "Token is required");
}

#[tokio::test]
async fn test_rate_limited_returns_429_with_fixed_message() {
    let error = ApiError::RateLimited {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], "rate_limit_exceeded");
    assert_eq!(json["message"], RATE_LIMIT_MESSAGE);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        code: "internal_error",
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal_error");
}

#[test]
fn test_with_code_replaces_conflict_code() {
    let error = ApiError::Conflict {
        code: "email_taken",
        message: "email is already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    match error.with_code("registration_failed") {
        ApiError::Conflict { code, message, .. } => {
            assert_eq!(code, "registration_failed");
            assert_eq!(message, "email is already registered");
        }
        _ => panic!("Expected Conflict error"),
    }
}

#[test]
fn test_with_code_leaves_not_found_alone() {
    match ApiError::user_not_found(3).with_code("delete_failed") {
        ApiError::NotFound { code, .. } => assert_eq!(code, "user_not_found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_err = validate_name("A").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(field, Some("name"));
            assert!(message.contains("between"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_email_taken_converts_to_conflict() {
    let db_err = DbError::EmailTaken {
        email: "ada@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::CONFLICT);
}

#[test]
fn test_other_db_errors_convert_to_internal() {
    let db_err = DbError::Initialization {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { code, message, .. } => {
            assert_eq!(code, "internal_error");
            assert!(!message.contains("pool closed"));
        }
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_invalid_credentials_converts_to_login_failed() {
    let auth_err = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::LoginFailed { .. }));
    assert_eq!(api_err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_token_errors_share_one_message() {
    let expired: ApiError = AuthError::Expired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let bad_signature: ApiError = AuthError::InvalidSignature {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    for error in [expired, bad_signature] {
        match error {
            ApiError::Unauthorized { message, .. } => {
                assert_eq!(message, INVALID_TOKEN_MESSAGE)
            }
            _ => panic!("Expected Unauthorized error"),
        }
    }
}
