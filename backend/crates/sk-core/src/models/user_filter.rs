use serde::Deserialize;

/// Raw filter options as sent by clients.
///
/// Sort values are kept as strings here; unknown values fall back to the
/// defaults when the request is normalized into a `UserListQuery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Case-insensitive substring match on email
    pub email: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
