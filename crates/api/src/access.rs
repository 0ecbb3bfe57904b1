//! Tenant-scoped authorization and enrollment gating.
//!
//! Every read of a course, module, or lesson on behalf of a student goes
//! through this module so the gating rules live in exactly one place:
//!
//! 1. Resolve the target entity scoped to the requester's tenant
//!    ("exists but wrong tenant" is indistinguishable from "does not
//!    exist").
//! 2. Derive the owning course (directly, or lesson -> module -> course).
//! 3. Reject with a generic 403 unless a `course_enrollments` row links
//!    the requester to that course within the same tenant.
//!
//! Check ordering is part of the contract. For course lookups the
//! enrollment check runs BEFORE the existence check, so a non-enrolled
//! caller probing ids learns nothing about which courses exist. For
//! module/lesson lookups the in-tenant existence check runs first, because
//! the owning course cannot be derived from an id that resolves to
//! nothing.

use medlms_core::error::CoreError;
use medlms_core::types::DbId;
use medlms_db::models::content_item::ContentItem;
use medlms_db::models::course::Course;
use medlms_db::models::module::Module;
use medlms_db::models::user::User;
use medlms_db::repositories::{ContentItemRepo, CourseRepo, EnrollmentRepo, ModuleRepo};
use medlms_db::DbPool;

use crate::error::{AppError, AppResult};

/// Generic refusal for every enrollment failure. Deliberately does not say
/// whether the course exists.
const NOT_ENROLLED: &str = "You are not enrolled in this course";

/// Fail with 403 unless the user is enrolled in `course_id` within their
/// own tenant. Does not touch the `courses` table at all.
pub async fn ensure_enrolled(pool: &DbPool, course_id: DbId, user: &User) -> AppResult<()> {
    let enrolled = EnrollmentRepo::exists(pool, course_id, user.id, user.tenant_id).await?;
    if !enrolled {
        return Err(AppError::Core(CoreError::Forbidden(NOT_ENROLLED.into())));
    }
    Ok(())
}

/// Resolve an active course the user may read: enrollment first (403),
/// then in-tenant existence (404).
pub async fn resolve_course(pool: &DbPool, course_id: DbId, user: &User) -> AppResult<Course> {
    ensure_enrolled(pool, course_id, user).await?;

    CourseRepo::find_active_in_tenant(pool, course_id, user.tenant_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))
}

/// Resolve a module the user may read: in-tenant existence first (404),
/// then enrollment against the owning course (403).
pub async fn resolve_module(pool: &DbPool, module_id: DbId, user: &User) -> AppResult<Module> {
    let module = ModuleRepo::find_in_tenant(pool, module_id, user.tenant_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }))?;

    ensure_enrolled(pool, module.course_id, user).await?;
    Ok(module)
}

/// Resolve a lesson the user may read: in-tenant existence first (404),
/// then enrollment against the course owning the lesson's module (403).
pub async fn resolve_lesson(pool: &DbPool, lesson_id: DbId, user: &User) -> AppResult<ContentItem> {
    let lesson = ContentItemRepo::find_in_tenant(pool, lesson_id, user.tenant_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }))?;

    // The module row must exist (enforced by FK); a miss here means the
    // data is corrupt, not that the caller is unauthorized.
    let module = ModuleRepo::find_in_tenant(pool, lesson.module_id, user.tenant_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Content item {} references missing module {}",
                lesson.id, lesson.module_id
            )))
        })?;

    ensure_enrolled(pool, module.course_id, user).await?;
    Ok(lesson)
}
