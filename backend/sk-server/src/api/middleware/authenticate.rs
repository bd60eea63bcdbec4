use crate::{ApiError, AppState};
use crate::api::error::INVALID_TOKEN_MESSAGE;

use sk_auth::{AuthenticatedUser, extract_bearer_token};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::{debug, warn};

/// Bearer token gate for protected routes.
///
/// On success the caller's `AuthenticatedUser` is added to the request
/// extensions; any failure is a 401 and the inner handler is not called.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match request.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(text) => Some(text),
            Err(_) => {
                state.metrics.auth_rejected("invalid_header");
                return Err(ApiError::unauthorized(INVALID_TOKEN_MESSAGE));
            }
        },
    };

    let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
        state.metrics.auth_rejected("missing_header");
        return Err(ApiError::unauthorized("Authorization header is required"));
    };

    let Some(token) = extract_bearer_token(header) else {
        state.metrics.auth_rejected("missing_token");
        return Err(ApiError::unauthorized("Token is required"));
    };

    let claims = state.tokens.validate(token).map_err(|e| {
        warn!("Rejected bearer token [{}]: {}", e.error_code(), e);
        state.metrics.auth_rejected(e.error_code());
        ApiError::unauthorized(INVALID_TOKEN_MESSAGE)
    })?;

    debug!("Authenticated user {}", claims.user_id);
    request
        .extensions_mut()
        .insert(AuthenticatedUser::from_claims(claims));

    Ok(next.run(request).await)
}
