pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod seed;
pub mod sweeper;

#[cfg(test)]
mod tests;

pub use api::{
    api_json::ApiJson,
    api_response::{ApiResponse, MessageResponse},
    auth::{
        auth::{login, logout, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
    },
    error::{ApiError, ApiErrorBody, Result as ApiResult},
    extractors::current_user::CurrentUser,
    middleware::{
        authenticate::authenticate,
        client_key::client_key,
        login_rate_limit::login_rate_limit,
    },
    profile::profile::{get_profile, update_profile},
    users::{
        create_user_request::CreateUserRequest,
        list_users_query::ListUsersQuery,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        users::{
            create_user, delete_user, get_user, list_users, list_users_paginated, update_user,
        },
    },
};
pub use app_state::AppState;
pub use cli::{Cli, Command};
pub use error::{Result as ServerErrorResult, ServerError};
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;

/// Account created by `seed` on an empty database
pub const SEED_ADMIN_NAME: &str = "Admin";
pub const SEED_ADMIN_EMAIL: &str = "admin@example.com";
pub const SEED_ADMIN_PASSWORD: &str = "password123";
