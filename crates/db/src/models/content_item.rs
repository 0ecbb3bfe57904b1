//! Content item (lesson) entity model.

use medlms_core::content::{ContentKind, LessonBody};
use medlms_core::error::CoreError;
use medlms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A lesson inside a module, ordered by `sequence_order`.
///
/// The row is flat (kind discriminator plus nullable payload columns);
/// [`ContentItem::body`] reassembles the tagged payload for responses.
#[derive(Debug, Clone, FromRow)]
pub struct ContentItem {
    pub id: DbId,
    pub tenant_id: DbId,
    pub module_id: DbId,
    pub title: String,
    pub kind: ContentKind,
    pub file_url: Option<String>,
    pub text_content: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sequence_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ContentItem {
    /// Build the kind-specific payload from this row's flat columns.
    pub fn body(&self) -> Result<LessonBody, CoreError> {
        LessonBody::from_columns(
            self.kind,
            self.file_url.clone(),
            self.text_content.clone(),
            self.duration_minutes,
        )
    }
}

#[derive(Debug)]
pub struct CreateContentItem {
    pub tenant_id: DbId,
    pub module_id: DbId,
    pub title: String,
    pub body: LessonBody,
    pub sequence_order: i32,
}

impl CreateContentItem {
    /// Split the tagged payload back into flat storage columns:
    /// `(kind, file_url, text_content, duration_minutes)`.
    pub fn columns(&self) -> (ContentKind, Option<&str>, Option<&str>, Option<i32>) {
        match &self.body {
            LessonBody::Pdf { file_url } => (ContentKind::Pdf, Some(file_url), None, None),
            LessonBody::Video {
                file_url,
                duration_minutes,
            } => (ContentKind::Video, Some(file_url), None, Some(*duration_minutes)),
            LessonBody::Text { text_content } => (ContentKind::Text, None, Some(text_content), None),
        }
    }
}
