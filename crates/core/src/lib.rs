pub mod catalog;
pub mod error;
pub mod poster;
pub mod roles;
pub mod types;
