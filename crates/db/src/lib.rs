//! Persistence layer for the movie catalogue.
//!
//! - [`models`] -- row structs and write DTOs.
//! - [`repositories`] -- zero-sized repositories over a [`DbPool`].

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Deadline applied to every repository call.
///
/// For multi-statement writes the deadline covers the whole transaction.
pub const DB_CALL_TIMEOUT: Duration = Duration::from_secs(3);

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(DB_CALL_TIMEOUT)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    with_deadline(async {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    })
    .await
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Run a database future under [`DB_CALL_TIMEOUT`].
///
/// On expiry the future is dropped. Any transaction it held is dropped with
/// it, which rolls the transaction back.
pub async fn with_deadline<T, F>(fut: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(DB_CALL_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                timeout_secs = DB_CALL_TIMEOUT.as_secs(),
                "Database call exceeded deadline"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "database call exceeded deadline",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn stalled_call_times_out() {
        let result: Result<(), sqlx::Error> = with_deadline(async {
            tokio::time::sleep(DB_CALL_TIMEOUT * 2).await;
            Ok(())
        })
        .await;

        match result {
            Err(sqlx::Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::TimedOut),
            other => panic!("expected timeout error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fast_call_passes_through() {
        let result = with_deadline(async { Ok::<_, sqlx::Error>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
