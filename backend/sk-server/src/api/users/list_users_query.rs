use sk_core::{UserFilter, UserListRequest};

use serde::Deserialize;

/// Query string of `GET /api/v1/users`.
///
/// Paging values are kept as text so that junk like `page=abc` falls back
/// to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<ListUsersQuery> for UserListRequest {
    fn from(query: ListUsersQuery) -> Self {
        let parse = |v: Option<String>| v.and_then(|s| s.trim().parse::<i64>().ok());

        UserListRequest {
            page: parse(query.page),
            limit: parse(query.limit),
            filter: UserFilter {
                name: query.name,
                email: query.email,
                sort_by: query.sort_by,
                sort_order: query.sort_order,
            },
        }
    }
}
