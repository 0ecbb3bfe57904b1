//! Repository for the `modules` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::module::{CreateModule, Module};

const COLUMNS: &str = "id, tenant_id, course_id, title, sequence_order, created_at, updated_at";

pub struct ModuleRepo;

impl ModuleRepo {
    pub async fn create(pool: &PgPool, input: &CreateModule) -> Result<Module, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (tenant_id, course_id, title, sequence_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(input.tenant_id)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(input.sequence_order)
            .fetch_one(pool)
            .await
    }

    /// Find a module by id within a tenant.
    pub async fn find_in_tenant(
        pool: &PgPool,
        id: DbId,
        tenant_id: DbId,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// All modules of a course in natural (sequence) order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
        tenant_id: DbId,
    ) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules
             WHERE course_id = $1 AND tenant_id = $2
             ORDER BY sequence_order ASC"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(course_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }
}
