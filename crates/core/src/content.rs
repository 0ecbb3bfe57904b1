//! The closed set of lesson content kinds and the tagged lesson payload.
//!
//! Lessons are polymorphic over {PDF, VIDEO, TEXT}. The database row stores
//! a `content_kind` discriminator plus kind-specific nullable columns; the
//! domain model is the tagged [`LessonBody`] variant so a VIDEO always
//! carries a duration and a TEXT always carries a body.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Storage-level discriminator for lesson content (PostgreSQL enum
/// `content_kind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_kind", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentKind {
    Pdf,
    Video,
    Text,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Pdf => "PDF",
            ContentKind::Video => "VIDEO",
            ContentKind::Text => "TEXT",
        }
    }
}

/// Kind-specific lesson payload.
///
/// Serializes with a `content_type` tag and flattened fields, matching the
/// wire shape of lesson detail responses:
///
/// ```json
/// { "content_type": "VIDEO", "file_url": "...", "duration_minutes": 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "UPPERCASE")]
pub enum LessonBody {
    Pdf {
        file_url: String,
    },
    Video {
        file_url: String,
        duration_minutes: i32,
    },
    Text {
        text_content: String,
    },
}

impl LessonBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            LessonBody::Pdf { .. } => ContentKind::Pdf,
            LessonBody::Video { .. } => ContentKind::Video,
            LessonBody::Text { .. } => ContentKind::Text,
        }
    }

    /// Reassemble a tagged payload from flat storage columns.
    ///
    /// Fails with [`CoreError::Internal`] when a row is missing the column
    /// its kind requires, which indicates corrupt seed data rather than a
    /// caller mistake.
    pub fn from_columns(
        kind: ContentKind,
        file_url: Option<String>,
        text_content: Option<String>,
        duration_minutes: Option<i32>,
    ) -> Result<Self, CoreError> {
        match kind {
            ContentKind::Pdf => {
                let file_url = file_url.ok_or_else(|| {
                    CoreError::Internal("PDF content item is missing file_url".into())
                })?;
                Ok(LessonBody::Pdf { file_url })
            }
            ContentKind::Video => {
                let file_url = file_url.ok_or_else(|| {
                    CoreError::Internal("VIDEO content item is missing file_url".into())
                })?;
                let duration_minutes = duration_minutes.ok_or_else(|| {
                    CoreError::Internal("VIDEO content item is missing duration_minutes".into())
                })?;
                Ok(LessonBody::Video {
                    file_url,
                    duration_minutes,
                })
            }
            ContentKind::Text => {
                let text_content = text_content.ok_or_else(|| {
                    CoreError::Internal("TEXT content item is missing text_content".into())
                })?;
                Ok(LessonBody::Text { text_content })
            }
        }
    }
}
