//! Row models and write DTOs.

pub mod genre;
pub mod movie;
pub mod user;
