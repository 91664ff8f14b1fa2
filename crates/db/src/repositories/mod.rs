//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every call runs under
//! [`crate::with_deadline`].

pub mod genre_repo;
pub mod movie_repo;
pub mod user_repo;

pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
