//! Well-known role name constants.
//!
//! These must match the `users.role` default in `20260101000002_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
