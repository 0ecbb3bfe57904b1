//! Handlers for the `/courses` resource.
//!
//! All reads are enrollment-gated through [`crate::access`].

use axum::extract::{Path, State};
use axum::Json;
use medlms_core::types::DbId;
use medlms_db::models::course::Course;
use medlms_db::repositories::{CourseRepo, ModuleRepo};
use serde::Serialize;

use crate::access;
use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Listing entry for `GET /courses/my-courses`.
#[derive(Debug, Serialize)]
pub struct CourseBasic {
    pub id: DbId,
    pub title: String,
    pub code: Option<String>,
    pub faculty_name: Option<String>,
}

impl From<&Course> for CourseBasic {
    fn from(course: &Course) -> Self {
        CourseBasic {
            id: course.id,
            title: course.title.clone(),
            code: course.code.clone(),
            faculty_name: course.faculty_name.clone(),
        }
    }
}

/// Detail payload for `GET /courses/{id}`.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub id: DbId,
    pub title: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub faculty_name: Option<String>,
}

/// Listing entry for `GET /courses/{id}/modules`.
#[derive(Debug, Serialize)]
pub struct ModuleResponse {
    pub id: DbId,
    pub title: String,
    pub sequence_order: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/courses/my-courses
///
/// All active courses the caller is enrolled in. Stale enrollments
/// pointing at deactivated courses are dropped silently rather than
/// erroring.
pub async fn my_courses(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<CourseBasic>>> {
    let courses =
        CourseRepo::list_enrolled_active(&state.pool, current.user.id, current.user.tenant_id)
            .await?;

    Ok(Json(courses.iter().map(CourseBasic::from).collect()))
}

/// GET /api/v1/courses/{course_id}
///
/// Course detail (syllabus, faculty). Enrollment is checked before
/// existence, so a non-enrolled caller gets 403 even for an id that
/// resolves to nothing.
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    current: CurrentUser,
) -> AppResult<Json<CourseDetail>> {
    let course = access::resolve_course(&state.pool, course_id, &current.user).await?;

    Ok(Json(CourseDetail {
        id: course.id,
        title: course.title,
        code: course.code,
        description: course.description,
        faculty_name: course.faculty_name,
    }))
}

/// GET /api/v1/courses/{course_id}/modules
///
/// Modules of a course in sequence order.
pub async fn list_modules(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    current: CurrentUser,
) -> AppResult<Json<Vec<ModuleResponse>>> {
    access::ensure_enrolled(&state.pool, course_id, &current.user).await?;

    let modules = ModuleRepo::list_by_course(&state.pool, course_id, current.user.tenant_id).await?;

    Ok(Json(
        modules
            .into_iter()
            .map(|m| ModuleResponse {
                id: m.id,
                title: m.title,
                sequence_order: m.sequence_order,
            })
            .collect(),
    ))
}
