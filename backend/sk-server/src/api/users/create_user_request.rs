use sk_core::{CoreError, validate_email, validate_name, validate_password};

use serde::Deserialize;

/// Body of `POST /api/v1/users` and `POST /api/v1/auth/register`.
/// Missing fields deserialize as empty and fail validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Trim name and email, then validate every field
    pub fn normalized(self) -> Result<Self, CoreError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        validate_name(&name)?;
        validate_email(&email)?;
        validate_password(&self.password)?;

        Ok(Self {
            name,
            email,
            password: self.password,
        })
    }
}
