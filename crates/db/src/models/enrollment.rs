use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Join of a course and a student. The existence of a row is the sole
/// enrollment check; there is no status column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseEnrollment {
    pub id: DbId,
    pub course_id: DbId,
    pub student_id: DbId,
    pub tenant_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateEnrollment {
    pub course_id: DbId,
    pub student_id: DbId,
    pub tenant_id: DbId,
}
