use crate::{DEFAULT_PAGE, SortField, SortOrder, UserFilter};

use serde::Deserialize;

/// List request as received from clients (page/limit unvalidated)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserListRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub filter: UserFilter,
}

/// Normalized listing query. Always has `page >= 1` and `1 <= limit <= max_limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: u32,
    pub limit: u32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl UserListQuery {
    /// Clamp paging values and resolve sort options.
    ///
    /// - `page < 1` becomes 1
    /// - missing or `limit < 1` becomes `default_limit`
    /// - `limit > max_limit` becomes `max_limit`
    /// - blank filters are dropped, unknown sort values use the defaults
    pub fn from_request(request: UserListRequest, default_limit: u32, max_limit: u32) -> Self {
        let page = match request.page {
            Some(page) if page >= 1 => u32::try_from(page).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE,
        };

        let max_limit = max_limit.max(1);
        let limit = match request.limit {
            Some(limit) if limit >= 1 => u32::try_from(limit).unwrap_or(u32::MAX).min(max_limit),
            _ => default_limit.clamp(1, max_limit),
        };

        let filter = request.filter;

        Self {
            page,
            limit,
            name: normalize_text(filter.name),
            email: normalize_text(filter.email),
            sort_by: filter
                .sort_by
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            sort_order: filter
                .sort_order
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// Trim and drop empty strings
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
