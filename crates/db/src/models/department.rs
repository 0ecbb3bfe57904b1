use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An academic department (e.g. Anatomy, Physiology), tenant-scoped.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub head_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateDepartment {
    pub tenant_id: DbId,
    pub name: String,
    pub head_user_id: Option<DbId>,
}
