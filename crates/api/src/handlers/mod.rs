//! Request handlers.
//!
//! Catalogue handlers delegate to [`crate::catalog::CatalogService`] and map
//! errors via [`crate::error::AppError`].

pub mod admin_movies;
pub mod auth;
pub mod genres;
pub mod graphql;
pub mod movies;
