//! Repository for the `departments` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{CreateDepartment, Department};

const COLUMNS: &str = "id, tenant_id, name, head_user_id, created_at, updated_at";

pub struct DepartmentRepo;

impl DepartmentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (tenant_id, name, head_user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(input.tenant_id)
            .bind(&input.name)
            .bind(input.head_user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments WHERE tenant_id = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }
}
