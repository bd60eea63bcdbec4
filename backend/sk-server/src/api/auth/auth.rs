//! Authentication handlers: register, login, logout

use crate::api::users::users::create_account;
use crate::{
    ApiError, ApiJson, ApiResponse, ApiResult, AppState, CreateUserRequest, LoginRequest,
    LoginResponse, MessageResponse, UserDto,
};

use sk_auth::AuthError;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = create_account(&state, request, "registration_failed").await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Registration successful",
            user.into(),
        )),
    ))
}

/// POST /api/v1/auth/login
///
/// Sits behind the login rate limiter. Unknown email and wrong password
/// produce the same 401 `login_failed`.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    request.validate()?;

    let session = match state
        .authenticator
        .login(request.email.trim(), &request.password)
        .await
    {
        Ok(session) => session,
        Err(e) => {
            if matches!(e, AuthError::InvalidCredentials { .. }) {
                state.metrics.login_failed();
            }
            return Err(e.into());
        }
    };

    let user = state
        .users
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::LoginFailed {
            message: "invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    state.metrics.login_succeeded();

    Ok(Json(ApiResponse::with_message(
        "Login successful",
        LoginResponse {
            token: session.token,
            expires_in: session.expires_in,
            user: user.into(),
        },
    )))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logout successful",
    })
}
