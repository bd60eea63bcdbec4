//! Profile handlers for the authenticated caller

use crate::api::users::users::apply_update;
use crate::{
    ApiError, ApiJson, ApiResponse, ApiResult, AppState, CurrentUser, UpdateUserRequest, UserDto,
};

use axum::{Json, extract::State};

/// GET /api/v1/profile
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state
        .users
        .find_by_id(caller.user_id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(caller.user_id))?;

    Ok(Json(ApiResponse::data(user.into())))
}

/// PUT /api/v1/profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = apply_update(&state, caller.user_id, request).await?;

    Ok(Json(ApiResponse::with_message(
        "Profile updated successfully",
        user.into(),
    )))
}
