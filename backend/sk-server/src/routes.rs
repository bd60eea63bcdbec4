use crate::{
    AppState, authenticate, create_user, delete_user, get_profile, get_user, health,
    list_users, list_users_paginated, login, login_rate_limit, logout, register, update_profile,
    update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Everything here requires a valid bearer token
    let protected = Router::new()
        .route("/api/v1/profile", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        // Health and metrics
        .route("/health", get(health::health))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Authentication (public)
        .route("/api/v1/auth/register", post(register))
        .route(
            "/api/v1/auth/login",
            post(login).route_layer(middleware::from_fn_with_state(
                state.clone(),
                login_rate_limit,
            )),
        )
        .route("/api/v1/auth/logout", post(logout))
        // Users (public)
        .route("/api/v1/users", get(list_users).post(create_user))
        .route("/api/v1/users/pagination", post(list_users_paginated))
        .route(
            "/api/v1/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
