//! Route definitions for the `/content` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{module_id}/lessons", get(content::list_lessons))
        .route("/lesson/{lesson_id}", get(content::get_lesson))
        .route("/lesson/{lesson_id}/complete", post(content::complete_lesson))
}
