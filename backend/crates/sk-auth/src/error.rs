use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature is invalid {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Missing bearer credentials {location}")]
    MissingCredentials { location: ErrorLocation },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential lookup failed: {message} {location}")]
    CredentialStore {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "TOKEN_MALFORMED",
            Self::InvalidSignature { .. } => "TOKEN_INVALID_SIGNATURE",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::MissingCredentials { .. } => "MISSING_CREDENTIALS",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::CredentialStore { .. } => "CREDENTIAL_STORE_FAILED",
        }
    }

    /// True for failures that must surface to clients as a plain 401
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. }
                | Self::InvalidSignature { .. }
                | Self::Expired { .. }
                | Self::MissingCredentials { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
