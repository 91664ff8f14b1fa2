//! Schema construction and evaluation entry points.

use async_graphql::{EmptyMutation, EmptySubscription, Request, Response, Schema};
use serde::Serialize;

use crate::mutation::{ScratchPad, SnapshotMutation};
use crate::query::SnapshotQuery;
use crate::snapshot::Snapshot;

/// Read-only schema served over HTTP.
pub type CatalogSchema = Schema<SnapshotQuery, EmptyMutation, EmptySubscription>;

/// Schema with the in-memory mutation field set.
pub type ScratchSchema = Schema<SnapshotQuery, SnapshotMutation, EmptySubscription>;

/// Evaluation failure. Deliberately opaque: syntax errors, unknown fields
/// and argument type mismatches all collapse into [`QueryError::Execution`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The engine reported one or more errors. Partial data is discarded.
    #[error("error executing query")]
    Execution(Vec<String>),

    /// The result could not be converted to JSON.
    #[error("error executing query")]
    Encode(#[from] serde_json::Error),
}

/// Successful evaluation result, serialized as `{ "data": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub data: serde_json::Value,
}

/// Read-only query engine. Build once and share; cloning is cheap.
#[derive(Clone)]
pub struct QueryEngine {
    schema: CatalogSchema,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            schema: Schema::build(SnapshotQuery, EmptyMutation, EmptySubscription).finish(),
        }
    }

    /// Schema definition in SDL form.
    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }

    /// Evaluate `query` against `snapshot`.
    pub async fn run_query(&self, snapshot: Snapshot, query: &str) -> Result<QueryResult, QueryError> {
        let request = Request::new(query).data(snapshot);
        into_result(self.schema.execute(request).await)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine that also accepts mutation documents.
///
/// Mutations apply to a private copy of the snapshot. The copy, including
/// any changes, is returned next to the result; the input snapshot is left
/// untouched and nothing is written to the database.
#[derive(Clone)]
pub struct ScratchEngine {
    schema: ScratchSchema,
}

impl ScratchEngine {
    pub fn new() -> Self {
        Self {
            schema: Schema::build(SnapshotQuery, SnapshotMutation, EmptySubscription).finish(),
        }
    }

    /// Evaluate `query` and return the result plus the resulting working copy.
    pub async fn run(
        &self,
        snapshot: Snapshot,
        query: &str,
    ) -> Result<(QueryResult, Snapshot), QueryError> {
        let pad = ScratchPad::new(snapshot.movies().to_vec());
        let request = Request::new(query).data(snapshot).data(pad.clone());
        let result = into_result(self.schema.execute(request).await)?;
        Ok((result, Snapshot::new(pad.take().await)))
    }
}

impl Default for ScratchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn into_result(response: Response) -> Result<QueryResult, QueryError> {
    if response.is_err() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        tracing::debug!(?messages, "Query evaluation failed");
        return Err(QueryError::Execution(messages));
    }
    Ok(QueryResult {
        data: response.data.into_json()?,
    })
}
