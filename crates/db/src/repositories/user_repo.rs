//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};
use crate::with_deadline;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, role, created_at";

/// Provides account lookups and sign-up.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, role) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        with_deadline(
            sqlx::query_as::<_, User>(&query)
                .bind(&input.email)
                .bind(&input.password_hash)
                .bind(&input.role)
                .fetch_one(pool),
        )
        .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        with_deadline(
            sqlx::query_as::<_, User>(&query)
                .bind(email)
                .fetch_optional(pool),
        )
        .await
    }
}
