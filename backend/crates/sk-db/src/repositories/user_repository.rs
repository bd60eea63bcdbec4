//! User repository: CRUD over the `users` table.
//!
//! Every read filters out soft-deleted rows. Emails are unique among live
//! rows only, so a deleted user's email can be registered again.

use crate::{DbError, Result as DbErrorResult};

use sk_auth::{AuthError, CredentialStore, Credentials};
use sk_core::{NewUser, SortField, User, UserListQuery, UserUpdate};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, created_at, updated_at, deleted_at";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: timestamp(row.created_at, "created_at")?,
            updated_at: timestamp(row.updated_at, "updated_at")?,
            deleted_at: row
                .deleted_at
                .map(|ts| timestamp(ts, "deleted_at"))
                .transpose()?,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::CorruptRow {
        table: "users",
        message: format!("Invalid timestamp in users.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Map a unique index violation on `email` to `EmailTaken`
#[track_caller]
fn map_unique_violation(error: sqlx::Error, email: &str) -> DbError {
    if let sqlx::Error::Database(db) = &error
        && db.is_unique_violation()
    {
        return DbError::EmailTaken {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };
    }

    DbError::from(error)
}

/// Escape LIKE wildcards so filters match literally
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO users (name, email, password_hash, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING id
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &new_user.email))?;

        self.find_by_id(id).await?.ok_or_else(|| DbError::Initialization {
            message: format!("user {} vanished after insert", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE id = ? AND deleted_at IS NULL",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE email = ? AND deleted_at IS NULL",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Apply a partial update. Returns `None` when no live user has `id`.
    pub async fn update(&self, id: i64, update: UserUpdate) -> DbErrorResult<Option<User>> {
        let Some(mut user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(email) = &update.email
            && *email != user.email
            && self.find_by_email(email).await?.is_some()
        {
            return Err(DbError::EmailTaken {
                email: email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !user.apply(update) {
            return Ok(Some(user));
        }

        sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.updated_at.timestamp())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user.email))?;

        Ok(Some(user))
    }

    /// Mark a user deleted. Returns false when no live user has `id`.
    pub async fn soft_delete(&self, id: i64) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            "UPDATE users SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// One page of live users matching the query's filters, in its sort order
    pub async fn list(&self, query: &UserListQuery) -> DbErrorResult<Vec<User>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM users", USER_COLUMNS));
        push_filters(&mut builder, query);

        // Column and direction come from closed enums, never from raw input.
        builder.push(format!(
            " ORDER BY {} {}",
            query.sort_by.as_str(),
            query.sort_order.as_sql()
        ));
        if query.sort_by != SortField::Id {
            builder.push(", id ASC");
        }

        builder.push(" LIMIT ");
        builder.push_bind(i64::from(query.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let rows: Vec<UserRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(User::try_from).collect()
    }

    /// Number of live users matching the query's filters (paging ignored)
    pub async fn count(&self, query: &UserListQuery) -> DbErrorResult<i64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM users");
        push_filters(&mut builder, query);

        let total: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(total)
    }

    /// Number of rows in the table, deleted ones included
    pub async fn count_all(&self) -> DbErrorResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &UserListQuery) {
    builder.push(" WHERE deleted_at IS NULL");

    if let Some(name) = &query.name {
        builder.push(" AND name LIKE ");
        builder.push_bind(like_pattern(name));
        builder.push(" ESCAPE '\\'");
    }

    if let Some(email) = &query.email {
        builder.push(" AND email LIKE ");
        builder.push_bind(like_pattern(email));
        builder.push(" ESCAPE '\\'");
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> sk_auth::Result<Option<Credentials>> {
        let user = UserRepository::find_by_email(self, email)
            .await
            .map_err(|e| AuthError::CredentialStore {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(user.map(|u| Credentials {
            user_id: u.id,
            email: u.email,
            password_hash: u.password_hash,
        }))
    }
}
