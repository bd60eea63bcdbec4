use crate::{ApiError, AppState, client_key};

use std::net::SocketAddr;
use std::panic::Location;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

/// Reject login attempts beyond the per-client limit with 429.
/// Runs before the body is read, so denied requests never reach credential checks.
pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let key = client_key(request.headers(), peer);

    if !state.login_limiter.is_allowed(&key) {
        state.metrics.login_rate_limited();
        return Err(ApiError::RateLimited {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(next.run(request).await)
}
