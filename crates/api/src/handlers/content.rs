//! Handlers for the `/content` resource (lessons and completion).

use axum::extract::{Path, State};
use axum::Json;
use medlms_core::content::{ContentKind, LessonBody};
use medlms_core::types::{DbId, Timestamp};
use medlms_db::repositories::{ContentItemRepo, LessonProgressRepo};
use serde::Serialize;

use crate::access;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Listing entry for `GET /content/{module_id}/lessons`.
#[derive(Debug, Serialize)]
pub struct LessonSummary {
    pub id: DbId,
    pub title: String,
    pub content_type: ContentKind,
    pub duration_minutes: Option<i32>,
    pub sequence_order: i32,
    pub is_completed: bool,
}

/// Detail payload for `GET /content/lesson/{id}`: the tagged kind-specific
/// body flattened beside the common fields.
#[derive(Debug, Serialize)]
pub struct LessonDetail {
    pub id: DbId,
    pub title: String,
    pub sequence_order: i32,
    pub is_completed: bool,
    #[serde(flatten)]
    pub body: LessonBody,
}

/// Response for `POST /content/lesson/{id}/complete`.
#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub message: &'static str,
    pub lesson_id: DbId,
    pub completed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/content/{module_id}/lessons
///
/// Lessons of a module in sequence order, each annotated with the caller's
/// own completion state (no progress row means not completed).
pub async fn list_lessons(
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
    current: CurrentUser,
) -> AppResult<Json<Vec<LessonSummary>>> {
    let module = access::resolve_module(&state.pool, module_id, &current.user).await?;

    let lessons =
        ContentItemRepo::list_by_module(&state.pool, module.id, current.user.tenant_id).await?;
    let completed =
        LessonProgressRepo::completed_ids_for_module(&state.pool, current.user.id, module.id)
            .await?;

    Ok(Json(
        lessons
            .into_iter()
            .map(|lesson| LessonSummary {
                is_completed: completed.contains(&lesson.id),
                id: lesson.id,
                title: lesson.title,
                content_type: lesson.kind,
                duration_minutes: lesson.duration_minutes,
                sequence_order: lesson.sequence_order,
            })
            .collect(),
    ))
}

/// GET /api/v1/content/lesson/{lesson_id}
///
/// Full lesson payload (video URL, PDF link, or text body) plus the
/// caller's completion flag.
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<DbId>,
    current: CurrentUser,
) -> AppResult<Json<LessonDetail>> {
    let lesson = access::resolve_lesson(&state.pool, lesson_id, &current.user).await?;

    let progress = LessonProgressRepo::find(&state.pool, current.user.id, lesson.id).await?;
    let body = lesson.body().map_err(AppError::Core)?;

    Ok(Json(LessonDetail {
        id: lesson.id,
        title: lesson.title,
        sequence_order: lesson.sequence_order,
        is_completed: progress.map(|p| p.is_completed).unwrap_or(false),
        body,
    }))
}

/// POST /api/v1/content/lesson/{lesson_id}/complete
///
/// Mark a lesson complete. Idempotent in end state; `completed_at` is
/// refreshed on every call, including re-completion.
pub async fn complete_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<DbId>,
    current: CurrentUser,
) -> AppResult<Json<CompleteResponse>> {
    let lesson = access::resolve_lesson(&state.pool, lesson_id, &current.user).await?;

    let progress =
        LessonProgressRepo::mark_completed(&state.pool, current.user.id, lesson.id).await?;

    let completed_at = progress.completed_at.ok_or_else(|| {
        AppError::InternalError("Completed progress row is missing completed_at".into())
    })?;

    Ok(Json(CompleteResponse {
        message: "Lesson marked as complete",
        lesson_id: lesson.id,
        completed_at,
    }))
}
