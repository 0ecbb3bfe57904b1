//! The domain error taxonomy.
//!
//! [`CoreError`] is the error currency between the persistence and API
//! layers: not-found, validation, conflict, unauthorized, forbidden, and
//! internal. The API layer maps each variant to an HTTP status; nothing in
//! this crate knows about status codes.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
