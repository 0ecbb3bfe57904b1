//! Course entity model.

use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A course (e.g. "Human Anatomy - Semester 1"), tenant- and
/// department-scoped. `is_active` gates visibility everywhere: an inactive
/// course is invisible even to already-enrolled students.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub tenant_id: DbId,
    pub dept_id: Option<DbId>,
    pub title: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub faculty_name: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateCourse {
    pub tenant_id: DbId,
    pub dept_id: Option<DbId>,
    pub title: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub faculty_name: Option<String>,
}
