//! Request extractors: bearer-token authentication and role guards.

pub mod auth;
pub mod rbac;
