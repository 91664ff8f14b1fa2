//! Request-scoped, immutable movie snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::SimpleObject;
use chrono::NaiveDate;
use cinebase_core::types::{DbId, Timestamp};
use cinebase_db::models::movie::Movie;

/// The `Movie` object type exposed to queries.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Movie", rename_fields = "snake_case")]
pub struct MovieNode {
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

impl From<Movie> for MovieNode {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            release_date: m.release_date,
            runtime: m.runtime,
            mpaa_rating: m.mpaa_rating,
            description: m.description,
            image: m.image,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// An ordered, immutable sequence of movies for one query evaluation.
///
/// Cloning is cheap. The id index is built once on construction; when ids
/// repeat, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    movies: Arc<Vec<MovieNode>>,
    by_id: Arc<HashMap<DbId, usize>>,
}

impl Snapshot {
    pub fn new(movies: Vec<MovieNode>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            by_id.entry(movie.id).or_insert(pos);
        }
        Self {
            movies: Arc::new(movies),
            by_id: Arc::new(by_id),
        }
    }

    /// Build a snapshot from repository rows, keeping their order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self::new(movies.into_iter().map(MovieNode::from).collect())
    }

    pub fn movies(&self) -> &[MovieNode] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&MovieNode> {
        self.by_id.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Movies whose title contains `needle`, ignoring case, in snapshot order.
    pub fn search(&self, needle: &str) -> Vec<MovieNode> {
        let needle = needle.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
