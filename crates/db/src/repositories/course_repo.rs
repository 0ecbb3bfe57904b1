//! Repository for the `courses` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse};

const COLUMNS: &str = "id, tenant_id, dept_id, title, code, description, faculty_name, \
                       is_active, created_at, updated_at";

pub struct CourseRepo;

impl CourseRepo {
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (tenant_id, dept_id, title, code, description, faculty_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.tenant_id)
            .bind(input.dept_id)
            .bind(&input.title)
            .bind(&input.code)
            .bind(&input.description)
            .bind(&input.faculty_name)
            .fetch_one(pool)
            .await
    }

    /// Find an active course by id within a tenant. Inactive courses are
    /// invisible everywhere, so there is no caller for the inactive case.
    pub async fn find_active_in_tenant(
        pool: &PgPool,
        id: DbId,
        tenant_id: DbId,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE id = $1 AND tenant_id = $2 AND is_active = true"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// All active courses a student is enrolled in, within their tenant.
    ///
    /// The join on `is_active` silently drops stale enrollments that point
    /// at deactivated courses.
    pub async fn list_enrolled_active(
        pool: &PgPool,
        student_id: DbId,
        tenant_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.tenant_id, c.dept_id, c.title, c.code, c.description, \
                    c.faculty_name, c.is_active, c.created_at, c.updated_at
             FROM courses c
             JOIN course_enrollments e ON e.course_id = c.id
             WHERE e.student_id = $1 AND e.tenant_id = $2 AND c.is_active = true
             ORDER BY c.title ASC"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(student_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Toggle a course's active flag. Returns `true` if the row was updated.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE courses SET is_active = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(active)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
