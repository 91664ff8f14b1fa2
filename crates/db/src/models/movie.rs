//! Movie entity model and DTOs.
//!
//! A movie is associated with any number of genres through the
//! `movies_genres` junction table. Read responses carry full [`Genre`]
//! objects; the bare id list (`genres_int_array`) is only filled in when a
//! movie is loaded for editing.

use chrono::NaiveDate;
use cinebase_core::catalog::ValidatedMovie;
use cinebase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::genre::Genre;

/// A row from the `movies` table. `image` is never NULL here (reads coalesce it).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub mpaa_rating: String,
    pub description: String,
    pub image: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// A movie enriched with its genre set.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithGenres {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<Genre>,
    /// Genre ids for write forms. Empty unless loaded for editing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres_int_array: Vec<DbId>,
}

impl MovieWithGenres {
    /// Wrap a movie with its genres, leaving the edit-only id list empty.
    pub fn new(movie: Movie, genres: Vec<Genre>) -> Self {
        Self {
            movie,
            genres,
            genres_int_array: Vec::new(),
        }
    }

    /// Wrap a movie with its genres and fill in `genres_int_array`.
    pub fn for_edit(movie: Movie, genres: Vec<Genre>) -> Self {
        let genres_int_array = genres.iter().map(|g| g.id).collect();
        Self {
            movie,
            genres,
            genres_int_array,
        }
    }
}

/// DTO for inserting a movie together with its genre associations.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub mpaa_rating: String,
    pub description: String,
    pub image: String,
    /// One association row is inserted per id.
    pub genre_ids: Vec<DbId>,
}

/// DTO for updating a movie. Every scalar field is overwritten and the
/// genre associations are replaced wholesale, so the shape matches
/// [`CreateMovie`].
pub type UpdateMovie = CreateMovie;

impl From<ValidatedMovie> for CreateMovie {
    fn from(v: ValidatedMovie) -> Self {
        Self {
            title: v.title,
            release_date: v.release_date,
            runtime: v.runtime,
            mpaa_rating: v.mpaa_rating,
            description: v.description,
            image: v.image,
            genre_ids: v.genre_ids,
        }
    }
}
