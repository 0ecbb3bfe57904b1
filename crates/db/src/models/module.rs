use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A chapter inside a course, ordered by `sequence_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub tenant_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub sequence_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateModule {
    pub tenant_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub sequence_order: i32,
}
