//! Mutation root for scratch evaluation.
//!
//! Mutations act on a [`ScratchPad`], a private working copy of the
//! snapshot. They never reach the database.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use chrono::NaiveDate;
use cinebase_core::types::DbId;
use tokio::sync::Mutex;

use crate::snapshot::MovieNode;

/// Working copy mutated during one scratch evaluation.
#[derive(Debug, Clone, Default)]
pub struct ScratchPad(Arc<Mutex<Vec<MovieNode>>>);

impl ScratchPad {
    pub fn new(movies: Vec<MovieNode>) -> Self {
        Self(Arc::new(Mutex::new(movies)))
    }

    /// Take the current contents, leaving the pad empty.
    pub async fn take(&self) -> Vec<MovieNode> {
        std::mem::take(&mut *self.0.lock().await)
    }
}

/// Root mutation object.
#[derive(Default)]
pub struct SnapshotMutation;

#[Object(rename_args = "snake_case")]
impl SnapshotMutation {
    /// Add a new movie. The id is one past the largest id in the working copy.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        release_date: NaiveDate,
        runtime: Option<i32>,
        mpaa_rating: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<MovieNode> {
        let mut movies = ctx.data::<ScratchPad>()?.0.lock().await;
        let id = movies
            .iter()
            .map(|m| m.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or("movie id space exhausted")?;

        let movie = MovieNode {
            id,
            title,
            release_date,
            runtime: runtime.unwrap_or_default(),
            mpaa_rating: mpaa_rating.unwrap_or_default(),
            description: description.unwrap_or_default(),
            image: image.unwrap_or_default(),
            created_at: None,
            updated_at: None,
        };
        movies.push(movie.clone());
        Ok(movie)
    }

    /// Update an existing movie. Only the supplied arguments are applied;
    /// returns null when no movie has the given id.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        title: Option<String>,
        release_date: Option<NaiveDate>,
        runtime: Option<i32>,
        mpaa_rating: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Option<MovieNode>> {
        let mut movies = ctx.data::<ScratchPad>()?.0.lock().await;
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(title) = title {
            movie.title = title;
        }
        if let Some(release_date) = release_date {
            movie.release_date = release_date;
        }
        if let Some(runtime) = runtime {
            movie.runtime = runtime;
        }
        if let Some(mpaa_rating) = mpaa_rating {
            movie.mpaa_rating = mpaa_rating;
        }
        if let Some(description) = description {
            movie.description = description;
        }
        if let Some(image) = image {
            movie.image = image;
        }
        Ok(Some(movie.clone()))
    }

    /// Delete a movie by id. Removes the first match and returns whether
    /// anything was removed.
    async fn delete_movie(&self, ctx: &Context<'_>, id: DbId) -> Result<bool> {
        let mut movies = ctx.data::<ScratchPad>()?.0.lock().await;
        match movies.iter().position(|m| m.id == id) {
            Some(pos) => {
                movies.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
