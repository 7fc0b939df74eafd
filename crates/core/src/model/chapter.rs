use crate::model::ids::ChapterId;
use crate::model::{ContentError, Subject};

/// A subject-scoped topical grouping (e.g. Kinematics).
///
/// Chapters own lessons and questions; both must reference an existing chapter
/// before they can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: ChapterId,
    subject: Subject,
    title: String,
}

impl Chapter {
    /// Creates a chapter.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(id: ChapterId, subject: Subject, title: impl Into<String>) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        Ok(Self { id, subject, title })
    }

    #[must_use]
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
