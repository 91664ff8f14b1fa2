//! Genre entity model.
//!
//! Genres are seeded by migration and only ever referenced by movie writes.

use cinebase_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre: String,
}
