pub mod api_json;
pub mod api_response;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod profile;
pub mod users;
