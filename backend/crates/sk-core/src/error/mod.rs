use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort field: {value} {location}")]
    InvalidSortField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort order: {value} {location}")]
    InvalidSortOrder {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation errors, `None` otherwise
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Message without the source location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidSortField { value, .. } => format!("unknown sort field '{value}'"),
            Self::InvalidSortOrder { value, .. } => format!("unknown sort order '{value}'"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
