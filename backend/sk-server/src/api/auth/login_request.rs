use sk_core::{CoreError, validate_email};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[track_caller]
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_email(self.email.trim())?;

        if self.password.is_empty() {
            return Err(CoreError::Validation {
                field: "password",
                message: "password is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
