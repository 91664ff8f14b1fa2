//! Movie write-request validation and normalisation.
//!
//! Inbound add/update payloads carry the release date as a `YYYY-MM-DD`
//! string and the genre set as a list of ids that may arrive either as JSON
//! numbers or as numeric strings (HTML form values). [`MovieRequest::into_validated`]
//! turns such a payload into a [`ValidatedMovie`] ready for persistence.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Layout accepted for `release_date`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single genre id as sent by the client, before coercion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GenreIdInput {
    Number(i64),
    Text(String),
}

/// Request body for adding or updating a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MovieRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub release_date: String,
    #[validate(range(min = 0, message = "runtime must not be negative"))]
    pub runtime: i32,
    #[serde(default)]
    pub mpaa_rating: String,
    #[serde(default)]
    pub description: String,
    /// Poster URL. Empty or absent means "none supplied".
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreIdInput>,
}

/// A movie write payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub mpaa_rating: String,
    pub description: String,
    /// As sent by the caller; empty when none was supplied.
    pub image: String,
    /// Deduplicated genre ids in request order.
    pub genre_ids: Vec<DbId>,
}

impl ValidatedMovie {
    /// Whether the caller left the image empty or blank.
    pub fn needs_poster(&self) -> bool {
        self.image.trim().is_empty()
    }
}

impl MovieRequest {
    /// Validate field constraints, parse the release date and coerce genre ids.
    pub fn into_validated(self) -> Result<ValidatedMovie, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let release_date = parse_release_date(&self.release_date)?;
        let genre_ids = coerce_genre_ids(&self.genres)?;

        Ok(ValidatedMovie {
            title: self.title,
            release_date,
            runtime: self.runtime,
            mpaa_rating: self.mpaa_rating,
            description: self.description,
            image: self.image.unwrap_or_default(),
            genre_ids,
        })
    }
}

/// Parse a release date in the fixed `YYYY-MM-DD` layout.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "release_date '{raw}' is not a valid date (expected YYYY-MM-DD)"
        ))
    })
}

/// Coerce client-supplied genre ids into positive database ids.
///
/// Duplicates are dropped (first occurrence wins) so a request can never
/// produce two association rows for the same genre.
pub fn coerce_genre_ids(raw: &[GenreIdInput]) -> Result<Vec<DbId>, CoreError> {
    let mut ids: Vec<DbId> = Vec::with_capacity(raw.len());
    for input in raw {
        let id = match input {
            GenreIdInput::Number(n) => *n,
            GenreIdInput::Text(s) => s.trim().parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("genre id '{s}' is not a number"))
            })?,
        };
        if id <= 0 {
            return Err(CoreError::Validation(format!(
                "genre id {id} must be positive"
            )));
        }
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
