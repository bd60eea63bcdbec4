use crate::Result as AuthErrorResult;

use async_trait::async_trait;

/// What the authenticator needs to know about a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Lookup of stored credentials by login email.
///
/// Implemented by the database layer; tests use an in-memory store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AuthErrorResult<Option<Credentials>>;
}
