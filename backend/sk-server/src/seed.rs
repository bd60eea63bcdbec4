use crate::{SEED_ADMIN_EMAIL, SEED_ADMIN_NAME, SEED_ADMIN_PASSWORD, ServerErrorResult};

use sk_auth::hash_password;
use sk_core::NewUser;
use sk_db::UserRepository;

use log::info;

/// Insert the default admin account when the users table is empty.
/// Returns whether a row was inserted.
pub async fn seed_default_user(users: &UserRepository) -> ServerErrorResult<bool> {
    let existing = users.count_all().await?;
    if existing > 0 {
        info!("Seed skipped: users table already has {} rows", existing);
        return Ok(false);
    }

    let password_hash = hash_password(SEED_ADMIN_PASSWORD)?;
    let user = users
        .create(&NewUser {
            name: SEED_ADMIN_NAME.to_string(),
            email: SEED_ADMIN_EMAIL.to_string(),
            password_hash,
        })
        .await?;

    info!("Seeded default user {} ({})", user.email, user.id);
    Ok(true)
}
