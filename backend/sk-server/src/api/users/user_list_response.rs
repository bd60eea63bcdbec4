use crate::UserDto;

use sk_core::Pagination;

use serde::Serialize;

/// One page of users with paging metadata
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub data: Vec<UserDto>,
    pub pagination: Pagination,
}
