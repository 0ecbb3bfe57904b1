//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts, where the entity is created by service code

pub mod batch;
pub mod content_item;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod lesson_progress;
pub mod module;
pub mod student_detail;
pub mod tenant;
pub mod user;
