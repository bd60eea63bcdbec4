pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::pagination::Pagination;
pub use models::sort_field::SortField;
pub use models::sort_order::SortOrder;
pub use models::user::{NewUser, User, UserUpdate};
pub use models::user_filter::UserFilter;
pub use models::user_list_query::{UserListQuery, UserListRequest};
pub use validation::{validate_email, validate_name, validate_password};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_PASSWORD_LENGTH: usize = 6;
