use sk_core::{CoreError, UserUpdate, validate_email, validate_name};

use serde::Deserialize;

/// Body of `PUT /api/v1/users/{id}` and `PUT /api/v1/profile`.
/// Absent or blank fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_update(self) -> Result<UserUpdate, CoreError> {
        let name = non_blank(self.name);
        let email = non_blank(self.email);

        if let Some(name) = &name {
            validate_name(name)?;
        }
        if let Some(email) = &email {
            validate_email(email)?;
        }

        Ok(UserUpdate { name, email })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
