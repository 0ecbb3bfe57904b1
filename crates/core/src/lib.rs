//! Shared domain types for the medlms backend.
//!
//! This crate holds everything the persistence and API layers agree on:
//! id/timestamp aliases, the error taxonomy, and the closed enumerations
//! (user roles, lesson content kinds).

pub mod content;
pub mod error;
pub mod roles;
pub mod types;
