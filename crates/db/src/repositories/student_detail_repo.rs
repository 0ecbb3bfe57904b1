//! Repository for the `student_details` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::student_detail::{CreateStudentDetail, StudentDetail};

const COLUMNS: &str = "user_id, batch_id, enrollment_no, created_at, updated_at";

pub struct StudentDetailRepo;

impl StudentDetailRepo {
    /// Insert the student extension row for a user.
    ///
    /// A duplicate enrollment number violates
    /// `uq_student_details_enrollment_no` (global, not tenant-scoped).
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudentDetail,
    ) -> Result<StudentDetail, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_details (user_id, batch_id, enrollment_no)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentDetail>(&query)
            .bind(input.user_id)
            .bind(input.batch_id)
            .bind(&input.enrollment_no)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<StudentDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_details WHERE user_id = $1");
        sqlx::query_as::<_, StudentDetail>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
