//! Repository for the `movies` and `movies_genres` tables.

use cinebase_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieWithGenres, UpdateMovie};
use crate::repositories::GenreRepo;
use crate::with_deadline;

/// Column list for the `movies` table.
const COLUMNS: &str = "id, title, release_date, runtime, mpaa_rating, description, \
    COALESCE(image, '') AS image, created_at, updated_at";

/// Column list for the `movies` table aliased as `m` (used in JOIN queries).
const M_COLUMNS: &str = "m.id, m.title, m.release_date, m.runtime, m.mpaa_rating, \
    m.description, COALESCE(m.image, '') AS image, m.created_at, m.updated_at";

/// Provides CRUD operations for movies and their genre associations.
pub struct MovieRepo;

impl MovieRepo {
    /// List all movies ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title");
        with_deadline(sqlx::query_as::<_, Movie>(&query).fetch_all(pool)).await
    }

    /// List the movies associated with a genre, ordered by title.
    ///
    /// An unknown genre yields an empty list.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {M_COLUMNS} \
             FROM movies m \
             JOIN movies_genres mg ON m.id = mg.movie_id \
             WHERE mg.genre_id = $1 \
             ORDER BY m.title"
        );
        with_deadline(
            sqlx::query_as::<_, Movie>(&query)
                .bind(genre_id)
                .fetch_all(pool),
        )
        .await
    }

    /// Find a movie by id, enriched with its genres.
    pub async fn find_by_id_with_genres(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithGenres>, sqlx::Error> {
        with_deadline(async {
            match Self::find_row(pool, id).await? {
                Some(movie) => {
                    let genres = GenreRepo::list_for_movie(pool, id).await?;
                    Ok(Some(MovieWithGenres::new(movie, genres)))
                }
                None => Ok(None),
            }
        })
        .await
    }

    /// Like [`Self::find_by_id_with_genres`], but also fills in
    /// `genres_int_array` for edit forms.
    pub async fn find_for_edit(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithGenres>, sqlx::Error> {
        Ok(Self::find_by_id_with_genres(pool, id)
            .await?
            .map(|m| MovieWithGenres::for_edit(m.movie, m.genres)))
    }

    /// Insert a movie and one association row per genre id.
    ///
    /// Runs in a single transaction: a failing association insert (e.g. an
    /// unknown genre id) leaves neither the movie nor any association behind.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        with_deadline(async {
            let mut tx = pool.begin().await?;

            let insert_query = format!(
                "INSERT INTO movies \
                    (title, release_date, runtime, mpaa_rating, description, image, \
                     created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, now(), now()) \
                 RETURNING {COLUMNS}"
            );
            let movie = sqlx::query_as::<_, Movie>(&insert_query)
                .bind(&input.title)
                .bind(input.release_date)
                .bind(input.runtime)
                .bind(&input.mpaa_rating)
                .bind(&input.description)
                .bind(&input.image)
                .fetch_one(&mut *tx)
                .await?;

            Self::insert_genres_inner(&mut tx, movie.id, &input.genre_ids).await?;

            tx.commit().await?;
            tracing::debug!(movie_id = movie.id, genres = input.genre_ids.len(), "Movie inserted");
            Ok(movie)
        })
        .await
    }

    /// Overwrite a movie's scalar fields and replace its genre associations.
    ///
    /// The update, the association delete and the association inserts share
    /// one transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        with_deadline(async {
            let mut tx = pool.begin().await?;

            let update_query = format!(
                "UPDATE movies SET \
                    title = $2, \
                    release_date = $3, \
                    runtime = $4, \
                    mpaa_rating = $5, \
                    description = $6, \
                    image = $7, \
                    updated_at = now() \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            let movie = sqlx::query_as::<_, Movie>(&update_query)
                .bind(id)
                .bind(&input.title)
                .bind(input.release_date)
                .bind(input.runtime)
                .bind(&input.mpaa_rating)
                .bind(&input.description)
                .bind(&input.image)
                .fetch_optional(&mut *tx)
                .await?;

            let Some(movie) = movie else {
                return Ok(None);
            };

            Self::set_genres_inner(&mut tx, movie.id, &input.genre_ids).await?;

            tx.commit().await?;
            tracing::debug!(movie_id = movie.id, genres = input.genre_ids.len(), "Movie updated");
            Ok(Some(movie))
        })
        .await
    }

    /// Delete a movie's associations, then the movie row, in one transaction.
    ///
    /// Returns `true` if a movie row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        with_deadline(async {
            let mut tx = pool.begin().await?;

            sqlx::query("DELETE FROM movies_genres WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            let result = sqlx::query("DELETE FROM movies WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            Ok(result.rows_affected() > 0)
        })
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn find_row(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace genre associations within an existing transaction.
    ///
    /// Deletes every existing association, then inserts the new set.
    async fn set_genres_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movies_genres WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await?;

        Self::insert_genres_inner(tx, movie_id, genre_ids).await
    }

    /// Insert one association row per genre id within an existing transaction.
    async fn insert_genres_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for &genre_id in genre_ids {
            sqlx::query("INSERT INTO movies_genres (movie_id, genre_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(genre_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
