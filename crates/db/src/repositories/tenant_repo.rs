//! Repository for the `tenants` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::tenant::{CreateTenant, Tenant};

const COLUMNS: &str = "id, name, domain, is_active, created_at, updated_at";

pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants (name, domain)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(&input.name)
            .bind(&input.domain)
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return the oldest tenant, if any. Used by the default-tenant signup
    /// policy when the request names no tenant.
    pub async fn find_first(pool: &PgPool) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants ORDER BY created_at ASC LIMIT 1");
        sqlx::query_as::<_, Tenant>(&query).fetch_optional(pool).await
    }
}
