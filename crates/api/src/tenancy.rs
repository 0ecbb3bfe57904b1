//! Tenant resolution for signup.
//!
//! When a signup request names no tenant, we fall back to the oldest
//! existing tenant, bootstrapping a default one on a completely empty
//! database. Real tenant resolution (e.g. by request subdomain) is a
//! deliberate future replacement for this fallback; keeping the policy in
//! one function is what makes that swap possible.

use medlms_db::models::tenant::{CreateTenant, Tenant};
use medlms_db::repositories::TenantRepo;
use medlms_db::DbPool;

use crate::error::AppResult;

/// Name and domain of the tenant bootstrapped on an empty database.
const DEFAULT_TENANT_NAME: &str = "Default Medical College";
const DEFAULT_TENANT_DOMAIN: &str = "default.medlms.com";

/// Resolve the tenant new signups attach to when none is specified.
pub async fn resolve_default_tenant(pool: &DbPool) -> AppResult<Tenant> {
    if let Some(tenant) = TenantRepo::find_first(pool).await? {
        return Ok(tenant);
    }

    tracing::info!("No tenant exists yet; bootstrapping the default tenant");
    let tenant = TenantRepo::create(
        pool,
        &CreateTenant {
            name: DEFAULT_TENANT_NAME.to_string(),
            domain: Some(DEFAULT_TENANT_DOMAIN.to_string()),
        },
    )
    .await?;
    Ok(tenant)
}
