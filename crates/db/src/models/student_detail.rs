use medlms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// 1:1 extension of a STUDENT user: batch membership and enrollment number.
///
/// `enrollment_no` is unique across the whole system, not per tenant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentDetail {
    pub user_id: DbId,
    pub batch_id: Option<DbId>,
    pub enrollment_no: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateStudentDetail {
    pub user_id: DbId,
    pub batch_id: Option<DbId>,
    pub enrollment_no: Option<String>,
}
