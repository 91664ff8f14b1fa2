//! Catalogue service: request validation, poster enrichment and delegation
//! to the repositories.
//!
//! Writes run on a spawned task so a client hanging up mid-request cannot
//! cancel a transaction half-way. Each transaction is still bounded by
//! [`cinebase_db::DB_CALL_TIMEOUT`].

use std::future::Future;
use std::sync::Arc;

use cinebase_core::catalog::{MovieRequest, ValidatedMovie};
use cinebase_core::error::CoreError;
use cinebase_core::types::DbId;
use cinebase_db::models::genre::Genre;
use cinebase_db::models::movie::{CreateMovie, Movie, MovieWithGenres};
use cinebase_db::repositories::{GenreRepo, MovieRepo};
use cinebase_db::DbPool;
use cinebase_graph::Snapshot;

use crate::error::{AppError, AppResult};
use crate::poster::PosterLookup;

/// Entity name used in `NotFound` errors.
const MOVIE: &str = "Movie";

/// Stateless facade over the pool and the poster lookup. Cheap to clone.
#[derive(Clone)]
pub struct CatalogService {
    pool: DbPool,
    posters: Arc<dyn PosterLookup>,
}

impl CatalogService {
    pub fn new(pool: DbPool, posters: Arc<dyn PosterLookup>) -> Self {
        Self { pool, posters }
    }

    /// Whether new movies without an image get a poster looked up.
    pub fn poster_lookup_enabled(&self) -> bool {
        self.posters.is_enabled()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// All movies by title, or only those tagged with `genre_id`.
    pub async fn list_movies(&self, genre_id: Option<DbId>) -> AppResult<Vec<Movie>> {
        let movies = match genre_id {
            Some(genre_id) => MovieRepo::list_by_genre(&self.pool, genre_id).await?,
            None => MovieRepo::list(&self.pool).await?,
        };
        Ok(movies)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        Ok(GenreRepo::list(&self.pool).await?)
    }

    /// A movie with its genres.
    pub async fn get_movie(&self, id: DbId) -> AppResult<MovieWithGenres> {
        MovieRepo::find_by_id_with_genres(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// A movie with its genres and the `genres_int_array` edit list.
    pub async fn get_movie_for_edit(&self, id: DbId) -> AppResult<MovieWithGenres> {
        MovieRepo::find_for_edit(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Snapshot of every movie, in title order, for the query engine.
    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        let movies = MovieRepo::list(&self.pool).await?;
        Ok(Snapshot::from_movies(movies))
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Validate and insert a movie.
    ///
    /// When the request carries no image, the poster lookup is consulted by
    /// title. A failed or empty lookup leaves the image empty.
    pub async fn add_movie(&self, request: MovieRequest) -> AppResult<Movie> {
        let mut validated = request.into_validated()?;
        if validated.needs_poster() {
            validated.image = resolve_poster(self.posters.as_ref(), &validated.title).await;
        }

        let pool = self.pool.clone();
        let input = CreateMovie::from(validated);
        let movie = detached(async move { MovieRepo::create(&pool, &input).await }).await??;

        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie added");
        Ok(movie)
    }

    /// Validate and overwrite a movie, replacing its genre set.
    ///
    /// The image is taken verbatim from the request.
    pub async fn update_movie(&self, id: DbId, request: MovieRequest) -> AppResult<Movie> {
        let validated: ValidatedMovie = request.into_validated()?;

        let pool = self.pool.clone();
        let input = CreateMovie::from(validated);
        let movie = detached(async move { MovieRepo::update(&pool, id, &input).await })
            .await??
            .ok_or_else(|| not_found(id))?;

        tracing::info!(movie_id = movie.id, "Movie updated");
        Ok(movie)
    }

    /// Delete a movie and its genre associations. Unknown ids are a no-op.
    pub async fn delete_movie(&self, id: DbId) -> AppResult<()> {
        let pool = self.pool.clone();
        let removed = detached(async move { MovieRepo::delete(&pool, id).await }).await??;

        if removed {
            tracing::info!(movie_id = id, "Movie deleted");
        } else {
            tracing::debug!(movie_id = id, "Delete of unknown movie ignored");
        }
        Ok(())
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: MOVIE, id })
}

/// Look up a poster for `title`, degrading any failure to an empty image.
async fn resolve_poster(posters: &dyn PosterLookup, title: &str) -> String {
    match posters.lookup(title).await {
        Ok(Some(url)) => url,
        Ok(None) => {
            tracing::debug!(title, "No poster found");
            String::new()
        }
        Err(e) => {
            tracing::warn!(title, error = %e, "Poster lookup failed");
            String::new()
        }
    }
}

/// Run `fut` on its own task so dropping the caller does not cancel it.
async fn detached<F, T>(fut: F) -> AppResult<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(fut)
        .await
        .map_err(|e| AppError::InternalError(format!("Write task failed: {e}")))
}
