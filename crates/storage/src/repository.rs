use async_trait::async_trait;
use prep_core::model::{Chapter, ChapterId, Lesson, LessonId, Question, QuestionId};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result of an upsert keyed by identifier.
///
/// Upserts are create-if-absent: an existing row is left untouched and
/// reported as `Unchanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Unchanged,
}

impl UpsertOutcome {
    #[must_use]
    pub fn is_created(self) -> bool {
        matches!(self, UpsertOutcome::Created)
    }
}

/// Repository contract for chapters.
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Store a chapter unless one with the same ID already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the chapter cannot be stored.
    async fn upsert_chapter(&self, chapter: &Chapter) -> Result<UpsertOutcome, StorageError>;

    /// Fetch a chapter by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StorageError>;

    /// List all chapters ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn list_chapters(&self) -> Result<Vec<Chapter>, StorageError>;
}

/// Repository contract for lessons.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Store a lesson unless one with the same ID already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ConstraintViolation` if the owning chapter is missing,
    /// or other storage errors.
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<UpsertOutcome, StorageError>;

    /// Fetch a lesson by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError>;

    /// List all lessons ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError>;
}

/// Repository contract for questions and their options.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a question together with its options unless the question already exists.
    ///
    /// Options are only written as part of creating the question; an existing
    /// question keeps its stored options.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ConstraintViolation` if the owning chapter is missing,
    /// or other storage errors.
    async fn upsert_question(&self, question: &Question) -> Result<UpsertOutcome, StorageError>;

    /// Fetch a question with its options ordered by index.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, StorageError>;

    /// List all questions ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Applies the same referential rules as the `SQLite` schema.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    chapters: Arc<Mutex<BTreeMap<ChapterId, Chapter>>>,
    lessons: Arc<Mutex<BTreeMap<LessonId, Lesson>>>,
    questions: Arc<Mutex<BTreeMap<QuestionId, Question>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn chapter_exists(&self, id: &ChapterId) -> Result<bool, StorageError> {
        let guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.contains_key(id))
    }
}

fn missing_chapter(id: &ChapterId) -> StorageError {
    StorageError::ConstraintViolation(format!("chapter {id} does not exist"))
}

#[async_trait]
impl ChapterRepository for InMemoryRepository {
    async fn upsert_chapter(&self, chapter: &Chapter) -> Result<UpsertOutcome, StorageError> {
        let mut guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(chapter.id()) {
            return Ok(UpsertOutcome::Unchanged);
        }
        guard.insert(chapter.id().clone(), chapter.clone());
        Ok(UpsertOutcome::Created)
    }

    async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StorageError> {
        let guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(id).cloned())
    }

    async fn list_chapters(&self) -> Result<Vec<Chapter>, StorageError> {
        let guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<UpsertOutcome, StorageError> {
        if !self.chapter_exists(lesson.chapter_id())? {
            return Err(missing_chapter(lesson.chapter_id()));
        }
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(lesson.id()) {
            return Ok(UpsertOutcome::Unchanged);
        }
        guard.insert(lesson.id().clone(), lesson.clone());
        Ok(UpsertOutcome::Created)
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(id).cloned())
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn upsert_question(&self, question: &Question) -> Result<UpsertOutcome, StorageError> {
        if !self.chapter_exists(question.chapter_id())? {
            return Err(missing_chapter(question.chapter_id()));
        }
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(question.id()) {
            return Ok(UpsertOutcome::Unchanged);
        }
        guard.insert(question.id().clone(), question.clone());
        Ok(UpsertOutcome::Created)
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

/// Aggregates the content repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub chapters: Arc<dyn ChapterRepository>,
    pub lessons: Arc<dyn LessonRepository>,
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let chapters: Arc<dyn ChapterRepository> = Arc::new(repo.clone());
        let lessons: Arc<dyn LessonRepository> = Arc::new(repo.clone());
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo);
        Self {
            chapters,
            lessons,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{AnswerOption, Subject};

    fn chapter(id: &str) -> Chapter {
        Chapter::new(ChapterId::new(id).unwrap(), Subject::Physics, "Kinematics").unwrap()
    }

    fn question(id: &str, chapter_id: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            ChapterId::new(chapter_id).unwrap(),
            "Q",
            1,
            vec![
                AnswerOption::new(1, "b", false).unwrap(),
                AnswerOption::new(0, "a", true).unwrap(),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn upsert_keeps_first_version() {
        let repo = InMemoryRepository::new();
        let first = chapter("phy-kinematics");
        assert_eq!(
            repo.upsert_chapter(&first).await.unwrap(),
            UpsertOutcome::Created
        );

        let renamed = Chapter::new(first.id().clone(), Subject::Physics, "Renamed").unwrap();
        assert_eq!(
            repo.upsert_chapter(&renamed).await.unwrap(),
            UpsertOutcome::Unchanged
        );

        let stored = repo.get_chapter(first.id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Kinematics");
        assert_eq!(repo.list_chapters().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lesson_requires_existing_chapter() {
        let repo = InMemoryRepository::new();
        let lesson = Lesson::new(
            LessonId::new("lesson-1").unwrap(),
            ChapterId::new("missing").unwrap(),
            "Orphan",
        )
        .unwrap();
        let err = repo.upsert_lesson(&lesson).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert!(repo.list_lessons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn question_round_trips_with_ordered_options() {
        let repo = InMemoryRepository::new();
        repo.upsert_chapter(&chapter("phy-kinematics")).await.unwrap();
        let q = question("q-1", "phy-kinematics");
        repo.upsert_question(&q).await.unwrap();

        let fetched = repo.get_question(q.id()).await.unwrap().unwrap();
        assert_eq!(fetched.options()[0].idx(), 0);
        assert!(fetched.options()[0].is_correct());

        let missing = QuestionId::new("nope").unwrap();
        assert!(repo.get_question(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn question_requires_existing_chapter() {
        let repo = InMemoryRepository::new();
        let err = repo
            .upsert_question(&question("q-1", "missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }
}
