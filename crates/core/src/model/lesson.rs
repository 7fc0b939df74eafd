use serde::Serialize;

use crate::model::ids::{ChapterId, LessonId};
use crate::model::{ContentError, Subject};

/// A single teaching unit within a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    chapter_id: ChapterId,
    title: String,
}

impl Lesson {
    /// Creates a lesson owned by `chapter_id`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(
        id: LessonId,
        chapter_id: ChapterId,
        title: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        Ok(Self {
            id,
            chapter_id,
            title,
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Listing row for the lessons endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    pub id: String,
    pub subject: Subject,
    pub title: String,
}

impl LessonSummary {
    #[must_use]
    pub fn new(id: &str, subject: Subject, title: &str) -> Self {
        Self {
            id: id.to_owned(),
            subject,
            title: title.to_owned(),
        }
    }
}
