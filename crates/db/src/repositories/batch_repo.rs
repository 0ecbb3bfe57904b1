//! Repository for the `batches` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::batch::{Batch, CreateBatch};

const COLUMNS: &str = "id, tenant_id, name, start_year, created_at, updated_at";

pub struct BatchRepo;

impl BatchRepo {
    pub async fn create(pool: &PgPool, input: &CreateBatch) -> Result<Batch, sqlx::Error> {
        let query = format!(
            "INSERT INTO batches (tenant_id, name, start_year)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(input.tenant_id)
            .bind(&input.name)
            .bind(input.start_year)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_tenant(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Batch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM batches WHERE tenant_id = $1 ORDER BY start_year DESC"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }
}
