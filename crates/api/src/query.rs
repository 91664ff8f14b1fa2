//! Shared query parameter types for API handlers.

use cinebase_core::types::DbId;
use serde::{Deserialize, Deserializer};

/// Query parameters for `GET /movies` (`?genre=<id>`).
///
/// An empty or blank `genre` means no filter.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub genre: Option<DbId>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
