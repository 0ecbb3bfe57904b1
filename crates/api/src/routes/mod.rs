pub mod admin;
pub mod auth;
pub mod content;
pub mod courses;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                       register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      new token (requires auth)
/// /auth/reset-password               reset request (public, uninformative)
/// /auth/me                           current user (requires auth)
///
/// /courses/my-courses                enrolled active courses
/// /courses/{id}                      course detail (enrollment-gated)
/// /courses/{id}/modules              ordered modules (enrollment-gated)
///
/// /content/{module_id}/lessons       ordered lessons + completion flags
/// /content/lesson/{id}               lesson payload + completion flag
/// /content/lesson/{id}/complete      mark complete (POST)
///
/// /admin/users                       tenant user list (admin only)
/// /admin/users/{id}                  tenant user detail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/courses", courses::router())
        .nest("/content", content::router())
        .nest("/admin", admin::router())
}
