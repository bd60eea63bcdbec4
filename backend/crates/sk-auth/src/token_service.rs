use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and validates HS256 bearer tokens.
///
/// The secret and TTL are fixed at construction. Validation is stateless:
/// a token is accepted iff its signature verifies and `now < exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked after decoding so that `now == exp` counts as
        // expired and no leeway applies.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for the given subject, valid for the configured TTL
    #[track_caller]
    pub fn issue(&self, user_id: i64, email: &str) -> AuthErrorResult<String> {
        self.issue_at(user_id, email, Utc::now().timestamp())
    }

    #[track_caller]
    pub(crate) fn issue_at(&self, user_id: i64, email: &str, now: i64) -> AuthErrorResult<String> {
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            user_id,
            email: email.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::TokenEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Validate a token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, Utc::now().timestamp())
    }

    #[track_caller]
    pub(crate) fn validate_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::ExpiredSignature => AuthError::Expired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::Malformed {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if claims.is_expired_at(now) {
            return Err(AuthError::Expired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}
