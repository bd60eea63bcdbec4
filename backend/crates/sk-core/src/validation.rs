//! Input validation for user fields.

use crate::{
    CoreError, MAX_NAME_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, Result as CoreErrorResult,
};

use std::panic::Location;

use error_location::ErrorLocation;

#[track_caller]
pub fn validate_name(name: &str) -> CoreErrorResult<()> {
    let len = name.trim().chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation {
            field: "name",
            message: format!(
                "name must be between {} and {} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Accepts `local@domain.tld`. Not a full RFC 5322 parser.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let email = email.trim();

    let valid = !email.contains(char::is_whitespace)
        && match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && domain.split('.').all(|label| !label.is_empty())
            }
            None => false,
        };

    if !valid {
        return Err(CoreError::Validation {
            field: "email",
            message: "email must be a valid email address".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation {
            field: "password",
            message: format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
