//! Query root: read access to the request's [`Snapshot`].

use async_graphql::{Context, Object, Result};
use cinebase_core::types::DbId;

use crate::snapshot::{MovieNode, Snapshot};

/// Root query object.
#[derive(Default)]
pub struct SnapshotQuery;

#[Object]
impl SnapshotQuery {
    /// Get all movies
    async fn list(&self, ctx: &Context<'_>) -> Result<Vec<MovieNode>> {
        Ok(ctx.data::<Snapshot>()?.movies().to_vec())
    }

    /// Search movies by title (case-insensitive substring match)
    async fn search(
        &self,
        ctx: &Context<'_>,
        title_contains: Option<String>,
    ) -> Result<Vec<MovieNode>> {
        let snapshot = ctx.data::<Snapshot>()?;
        Ok(match title_contains {
            Some(needle) => snapshot.search(&needle),
            None => Vec::new(),
        })
    }

    /// Get movie by id. Without an id there is nothing to match.
    async fn get(&self, ctx: &Context<'_>, id: Option<DbId>) -> Result<Option<MovieNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(ctx.data::<Snapshot>()?.get(id).cloned())
    }
}
