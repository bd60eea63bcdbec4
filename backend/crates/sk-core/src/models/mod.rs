pub mod pagination;
pub mod sort_field;
pub mod sort_order;
pub mod user;
pub mod user_filter;
pub mod user_list_query;
