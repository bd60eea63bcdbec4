//! User entity - the only persisted aggregate of the starter kit.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user.
///
/// `password_hash` holds an Argon2 PHC string and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete marker
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if user is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply a partial update and bump `updated_at`.
    /// Returns true when any field actually changed.
    pub fn apply(&mut self, update: UserUpdate) -> bool {
        let mut changed = false;

        if let Some(name) = update.name
            && name != self.name
        {
            self.name = name;
            changed = true;
        }

        if let Some(email) = update.email
            && email != self.email
        {
            self.email = email;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }

        changed
    }
}

/// Data required to insert a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
