//! Handlers for the `/admin` resource (tenant-scoped user reads).
//!
//! All handlers require the ADMIN role via [`RequireAdmin`] and only see
//! the admin's own tenant.

use axum::extract::{Path, State};
use axum::Json;
use medlms_core::error::CoreError;
use medlms_core::types::DbId;
use medlms_db::models::user::UserSummary;
use medlms_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/users
///
/// All users of the admin's tenant, most recently created first.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(current): RequireAdmin,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = UserRepo::list_by_tenant(&state.pool, current.user.tenant_id).await?;
    Ok(Json(users.iter().map(UserSummary::from).collect()))
}

/// GET /api/v1/admin/users/{id}
///
/// One user of the admin's tenant. A user of another tenant is
/// indistinguishable from a nonexistent one.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    RequireAdmin(current): RequireAdmin,
) -> AppResult<Json<UserSummary>> {
    let user = UserRepo::find_in_tenant(&state.pool, user_id, current.user.tenant_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(UserSummary::from(&user)))
}
