//! User REST API handlers
//!
//! CRUD over users plus the two listing endpoints (query string and JSON body).

use crate::{
    ApiError, ApiJson, ApiResponse, ApiResult, AppState, CreateUserRequest, ListUsersQuery,
    MessageResponse, UpdateUserRequest, UserDto, UserListResponse,
};

use sk_auth::hash_password;
use sk_core::{NewUser, Pagination, User, UserListQuery, UserListRequest};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = create_account(&state, request, "creation_failed").await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "User created successfully",
            user.into(),
        )),
    ))
}

/// GET /api/v1/users?page=&limit=&name=&email=&sort_by=&sort_order=
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    list_page(&state, query.into()).await.map(Json)
}

/// POST /api/v1/users/pagination
///
/// Body: `{"page", "limit", "filter": {"name", "email", "sort_by", "sort_order"}}`
pub async fn list_users_paginated(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UserListRequest>,
) -> ApiResult<Json<UserListResponse>> {
    list_page(&state, request).await.map(Json)
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let id = parse_user_id(&id)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(id))?;

    Ok(Json(ApiResponse::data(user.into())))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let id = parse_user_id(&id)?;
    let user = apply_update(&state, id, request).await?;

    Ok(Json(ApiResponse::with_message(
        "User updated successfully",
        user.into(),
    )))
}

/// DELETE /api/v1/users/{id}
///
/// Soft delete: the row is kept with `deleted_at` set.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;

    let deleted = state
        .users
        .soft_delete(id)
        .await
        .map_err(|e| ApiError::from(e).with_code("delete_failed"))?;
    if !deleted {
        return Err(ApiError::user_not_found(id));
    }

    info!("User {} deleted", id);
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

// =============================================================================
// Shared with the auth and profile handlers
// =============================================================================

/// Validate, hash the password and insert. A taken email is a 409 with `conflict_code`.
pub(crate) async fn create_account(
    state: &AppState,
    request: CreateUserRequest,
    conflict_code: &'static str,
) -> ApiResult<User> {
    let request = request.normalized()?;

    // Argon2 is CPU bound; keep it off the async workers.
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal {
            code: conflict_code,
            message: format!("password hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })??;

    let user = state
        .users
        .create(&NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await
        .map_err(|e| ApiError::from(e).with_code(conflict_code))?;

    state.metrics.user_created();
    info!("User {} created", user.id);

    Ok(user)
}

/// Apply a partial update to a live user
pub(crate) async fn apply_update(
    state: &AppState,
    id: i64,
    request: UpdateUserRequest,
) -> ApiResult<User> {
    let update = request.into_update()?;

    state
        .users
        .update(id, update)
        .await
        .map_err(|e| ApiError::from(e).with_code("update_failed"))?
        .ok_or_else(|| ApiError::user_not_found(id))
}

async fn list_page(state: &AppState, request: UserListRequest) -> ApiResult<UserListResponse> {
    let query = UserListQuery::from_request(
        request,
        state.pagination.default_limit,
        state.pagination.max_limit,
    );

    let users = state
        .users
        .list(&query)
        .await
        .map_err(|e| ApiError::from(e).with_code("fetch_failed"))?;
    let total = state
        .users
        .count(&query)
        .await
        .map_err(|e| ApiError::from(e).with_code("fetch_failed"))?;

    Ok(UserListResponse {
        data: users.into_iter().map(UserDto::from).collect(),
        pagination: Pagination::new(query.page, query.limit, total),
    })
}

#[track_caller]
fn parse_user_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest {
            code: "invalid_id",
            message: "Invalid user ID".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
