pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{MIGRATOR, connect, run_migrations, rollback_migrations};
pub use repositories::user_repository::UserRepository;

/// SQLite busy timeout applied to every pooled connection
pub const BUSY_TIMEOUT_SECS: u64 = 5;
