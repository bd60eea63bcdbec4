pub mod authenticate;
pub mod client_key;
pub mod login_rate_limit;
