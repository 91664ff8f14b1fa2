//! Repository for the `genres` table.

use cinebase_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::with_deadline;

/// Read access to genres. Genres are never written by the catalogue.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        with_deadline(
            sqlx::query_as::<_, Genre>("SELECT id, genre FROM genres ORDER BY id").fetch_all(pool),
        )
        .await
    }

    /// Genres associated with a movie, ordered by label.
    ///
    /// A movie without associations yields an empty list. Callers apply the
    /// deadline.
    pub(crate) async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.genre \
             FROM movies_genres mg \
             LEFT JOIN genres g ON mg.genre_id = g.id \
             WHERE mg.movie_id = $1 \
             ORDER BY g.genre",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
