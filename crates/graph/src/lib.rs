//! Ad-hoc GraphQL query surface over an in-memory movie snapshot.
//!
//! The schema is built once per process ([`QueryEngine::new`]). Each request
//! supplies its own [`Snapshot`] of already-loaded movies, which is attached
//! to the execution as request data; evaluation never touches the database.
//!
//! - [`QueryEngine`] -- read-only: `list`, `search`, `get`.
//! - [`ScratchEngine`] -- additionally exposes `addMovie`, `updateMovie` and
//!   `deleteMovie`, applied to a private working copy that is handed back to
//!   the caller. Nothing is persisted.

pub mod engine;
pub mod mutation;
pub mod query;
pub mod snapshot;

pub use engine::{CatalogSchema, QueryEngine, QueryError, QueryResult, ScratchEngine, ScratchSchema};
pub use snapshot::{MovieNode, Snapshot};
