pub mod authenticated_user;
pub mod authenticator;
pub mod bearer;
pub mod claims;
pub mod credential_store;
pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod token_service;

pub use authenticated_user::AuthenticatedUser;
pub use authenticator::{Authenticator, Session};
pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use credential_store::{CredentialStore, Credentials};
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
