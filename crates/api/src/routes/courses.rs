//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`. The static `/my-courses` segment takes
/// priority over the `{course_id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/my-courses", get(courses::my_courses))
        .route("/{course_id}", get(courses::get_course))
        .route("/{course_id}/modules", get(courses::list_modules))
}
