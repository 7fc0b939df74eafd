use std::sync::Arc;

use prep_core::catalog;
use prep_core::model::{Chapter, ChapterId, LessonSummary, MockTest, Question, QuestionId};
use storage::repository::{ChapterRepository, QuestionRepository};

use crate::error::CatalogError;

/// Read side of the content browser.
///
/// Lesson and test listings come from the built-in catalog; chapters and
/// questions are read from the content store.
#[derive(Clone)]
pub struct CatalogService {
    chapters: Arc<dyn ChapterRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(
        chapters: Arc<dyn ChapterRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            chapters,
            questions,
        }
    }

    /// Lesson summaries in display order.
    #[must_use]
    pub fn list_lessons(&self) -> Vec<LessonSummary> {
        catalog::lesson_summaries()
    }

    /// Mock tests in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Content` if a built-in descriptor is invalid.
    pub fn list_tests(&self) -> Result<Vec<MockTest>, CatalogError> {
        Ok(catalog::mock_tests()?)
    }

    /// All stored chapters ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_chapters(&self) -> Result<Vec<Chapter>, CatalogError> {
        Ok(self.chapters.list_chapters().await?)
    }

    /// Fetch a chapter by ID.
    ///
    /// Returns `Ok(None)` when the chapter does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, CatalogError> {
        Ok(self.chapters.get_chapter(id).await?)
    }

    /// Fetch a question with its ordered options.
    ///
    /// Returns `Ok(None)` when the question does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, CatalogError> {
        Ok(self.questions.get_question(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn empty_store_lists_no_chapters() {
        let repo = InMemoryRepository::new();
        let service = CatalogService::new(Arc::new(repo.clone()), Arc::new(repo));
        assert!(service.list_chapters().await.unwrap().is_empty());
        let id = QuestionId::new("q-kin-1").unwrap();
        assert!(service.get_question(&id).await.unwrap().is_none());
    }

    #[test]
    fn static_listings_are_stable() {
        let repo = InMemoryRepository::new();
        let service = CatalogService::new(Arc::new(repo.clone()), Arc::new(repo));
        assert_eq!(service.list_lessons(), service.list_lessons());
        let ids: Vec<String> = service
            .list_tests()
            .unwrap()
            .iter()
            .map(|t| t.id().to_string())
            .collect();
        assert_eq!(ids, vec!["quick-45", "full-neet"]);
    }
}
