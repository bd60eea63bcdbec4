use crate::{
    AuthError, CredentialStore, Result as AuthErrorResult, TokenService, verify_password,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};

/// Outcome of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Verifies email/password pairs and issues tokens
pub struct Authenticator<S> {
    store: S,
    tokens: Arc<TokenService>,
}

impl<S: CredentialStore> Authenticator<S> {
    pub fn new(store: S, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<Session> {
        let Some(credentials) = self.store.find_by_email(email).await? else {
            debug!("Login rejected: no account for email");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        // Argon2 verification is CPU bound; keep it off the async workers.
        let password = password.to_string();
        let hash = credentials.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;

        if !matches {
            debug!("Login rejected: password mismatch for user {}", credentials.user_id);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.tokens.issue(credentials.user_id, &credentials.email)?;
        info!("User {} logged in", credentials.user_id);

        Ok(Session {
            token,
            user_id: credentials.user_id,
            email: credentials.email,
            expires_in: self.tokens.ttl().as_secs(),
        })
    }
}
