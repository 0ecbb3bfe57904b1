//! Role-based access control extractors.
//!
//! Each extractor wraps [`CurrentUser`] and rejects requests whose role
//! does not meet the minimum requirement, enforcing authorization at the
//! type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use medlms_core::error::CoreError;
use medlms_core::roles::Role;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the ADMIN role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(current): RequireAdmin) -> AppResult<Json<()>> {
///     // current.user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state).await?;
        if current.user.role != Role::Admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(current))
    }
}
