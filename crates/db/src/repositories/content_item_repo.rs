//! Repository for the `content_items` table.

use medlms_core::types::DbId;
use sqlx::PgPool;

use crate::models::content_item::{ContentItem, CreateContentItem};

const COLUMNS: &str = "id, tenant_id, module_id, title, kind, file_url, text_content, \
                       duration_minutes, sequence_order, created_at, updated_at";

pub struct ContentItemRepo;

impl ContentItemRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateContentItem,
    ) -> Result<ContentItem, sqlx::Error> {
        let (kind, file_url, text_content, duration_minutes) = input.columns();
        let query = format!(
            "INSERT INTO content_items
                 (tenant_id, module_id, title, kind, file_url, text_content,
                  duration_minutes, sequence_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(input.tenant_id)
            .bind(input.module_id)
            .bind(&input.title)
            .bind(kind)
            .bind(file_url)
            .bind(text_content)
            .bind(duration_minutes)
            .bind(input.sequence_order)
            .fetch_one(pool)
            .await
    }

    /// Find a lesson by id within a tenant.
    pub async fn find_in_tenant(
        pool: &PgPool,
        id: DbId,
        tenant_id: DbId,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_items WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// All lessons of a module in natural (sequence) order.
    pub async fn list_by_module(
        pool: &PgPool,
        module_id: DbId,
        tenant_id: DbId,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_items
             WHERE module_id = $1 AND tenant_id = $2
             ORDER BY sequence_order ASC"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(module_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }
}
