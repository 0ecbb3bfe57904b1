use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Per-student completion state for one lesson. At most one row per
/// (student, content item), enforced by `uq_lesson_progress_student_content`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgress {
    pub id: DbId,
    pub student_id: DbId,
    pub content_item_id: DbId,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
