use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A student batch (e.g. "MBBS Batch of 2024"), tenant-scoped.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Batch {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub start_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateBatch {
    pub tenant_id: DbId,
    pub name: String,
    pub start_year: i32,
}
