//! HTTP server for the movie catalogue.
//!
//! Exposes public read endpoints, an admin write surface behind JWT auth and
//! a read-only ad-hoc query endpoint over an in-memory movie snapshot.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod poster;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
