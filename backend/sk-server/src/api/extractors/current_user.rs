//! Axum extractor for the authenticated caller

use crate::ApiError;

use sk_auth::AuthenticatedUser;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The caller identity placed in the request by the `authenticate` middleware.
///
/// Rejects with 401 when used on a route without that middleware.
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(CurrentUser)
                .ok_or_else(|| ApiError::unauthorized("User not authenticated"))
        }
    }
}
