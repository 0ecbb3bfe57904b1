//! Repository for the `lesson_progress` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson_progress::LessonProgress;

const COLUMNS: &str = "id, student_id, content_item_id, is_completed, completed_at, \
                       created_at, updated_at";

pub struct LessonProgressRepo;

impl LessonProgressRepo {
    /// The student's progress row for one lesson, if any. Absence means
    /// "not completed".
    pub async fn find(
        pool: &PgPool,
        student_id: DbId,
        content_item_id: DbId,
    ) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress
             WHERE student_id = $1 AND content_item_id = $2"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(student_id)
            .bind(content_item_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a lesson complete for a student.
    ///
    /// Conflict-handling upsert against
    /// `uq_lesson_progress_student_content`: concurrent calls for the same
    /// pair converge on one row instead of racing an insert. Re-completion
    /// keeps `is_completed = true` and refreshes `completed_at`.
    pub async fn mark_completed(
        pool: &PgPool,
        student_id: DbId,
        content_item_id: DbId,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (student_id, content_item_id, is_completed, completed_at)
             VALUES ($1, $2, true, now())
             ON CONFLICT (student_id, content_item_id)
             DO UPDATE SET is_completed = true, completed_at = now(), updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(student_id)
            .bind(content_item_id)
            .fetch_one(pool)
            .await
    }

    /// Ids of the lessons in one module the student has completed.
    ///
    /// One query per listing instead of one query per lesson.
    pub async fn completed_ids_for_module(
        pool: &PgPool,
        student_id: DbId,
        module_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT p.content_item_id
             FROM lesson_progress p
             JOIN content_items c ON c.id = p.content_item_id
             WHERE p.student_id = $1 AND c.module_id = $2 AND p.is_completed = true",
        )
        .bind(student_id)
        .bind(module_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
