//! Request extractors guarding the admin surface.

pub mod rbac;
