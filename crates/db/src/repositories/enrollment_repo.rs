//! Repository for the `course_enrollments` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{CourseEnrollment, CreateEnrollment};

const COLUMNS: &str = "id, course_id, student_id, tenant_id, created_at, updated_at";

pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a student in a course. A second enrollment for the same
    /// (course, student) pair violates
    /// `uq_course_enrollments_course_student`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<CourseEnrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_enrollments (course_id, student_id, tenant_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseEnrollment>(&query)
            .bind(input.course_id)
            .bind(input.student_id)
            .bind(input.tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Whether an enrollment row exists for (course, student, tenant).
    /// This is the single enrollment check every gated read relies on.
    pub async fn exists(
        pool: &PgPool,
        course_id: DbId,
        student_id: DbId,
        tenant_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM course_enrollments
                WHERE course_id = $1 AND student_id = $2 AND tenant_id = $3
             )",
        )
        .bind(course_id)
        .bind(student_id)
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;
        Ok(exists.0)
    }
}
