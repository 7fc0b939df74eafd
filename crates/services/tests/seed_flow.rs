use std::sync::Arc;

use prep_core::model::{ChapterId, Lesson, LessonId, QuestionId, Subject};
use services::{AppServices, SeedError, SeedService};
use storage::repository::{
    ChapterRepository, InMemoryRepository, LessonRepository, QuestionRepository, Storage,
    StorageError, UpsertOutcome,
};

async fn entity_counts(storage: &Storage) -> (usize, usize, usize) {
    (
        storage.chapters.list_chapters().await.unwrap().len(),
        storage.lessons.list_lessons().await.unwrap().len(),
        storage.questions.list_questions().await.unwrap().len(),
    )
}

async fn assert_seeded_content(storage: &Storage) {
    let kinematics = storage
        .chapters
        .get_chapter(&ChapterId::new("phy-kinematics").unwrap())
        .await
        .unwrap()
        .expect("kinematics chapter");
    assert_eq!(kinematics.subject(), Subject::Physics);
    assert_eq!(kinematics.title(), "Kinematics");

    let question = storage
        .questions
        .get_question(&QuestionId::new("q-kin-1").unwrap())
        .await
        .unwrap()
        .expect("seeded question");
    assert_eq!(question.options().len(), 4);
    let correct: Vec<_> = question
        .options()
        .iter()
        .filter(|o| o.is_correct())
        .collect();
    assert_eq!(correct.len(), 1);
    assert_eq!(correct[0].idx(), 2);
    assert_eq!(correct[0].text(), "20 m");
}

#[tokio::test]
async fn seeding_twice_matches_seeding_once_in_memory() {
    let storage = Storage::in_memory();
    let services = AppServices::from_storage(&storage);

    let first = services.seed().run().await.unwrap();
    let once = entity_counts(&storage).await;
    let second = services.seed().run().await.unwrap();
    let twice = entity_counts(&storage).await;

    assert_eq!(first.chapters_count, 3);
    assert_eq!(second.chapters_count, 3);
    assert_eq!(once, (3, 1, 1));
    assert_eq!(once, twice);
    assert_seeded_content(&storage).await;
}

#[tokio::test]
async fn seeding_twice_matches_seeding_once_in_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("seed.db").display());
    let storage = Storage::sqlite(&url).await.unwrap();
    let services = AppServices::from_storage(&storage);

    services.seed().run().await.unwrap();
    let once = entity_counts(&storage).await;
    services.seed().run().await.unwrap();
    let twice = entity_counts(&storage).await;

    assert_eq!(once, (3, 1, 1));
    assert_eq!(once, twice);
    assert_seeded_content(&storage).await;
}

struct FailingLessonRepo;

#[async_trait::async_trait]
impl LessonRepository for FailingLessonRepo {
    async fn upsert_lesson(&self, _lesson: &Lesson) -> Result<UpsertOutcome, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_lesson(&self, _id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test]
async fn seed_failure_aborts_remaining_steps() {
    let repo = InMemoryRepository::new();
    let seed = SeedService::new(
        Arc::new(repo.clone()),
        Arc::new(FailingLessonRepo),
        Arc::new(repo.clone()),
    );

    let err = seed.run().await.unwrap_err();
    assert!(matches!(err, SeedError::Storage(StorageError::Connection(_))));

    assert_eq!(repo.list_chapters().await.unwrap().len(), 3);
    let question = QuestionId::new("q-kin-1").unwrap();
    assert!(repo.get_question(&question).await.unwrap().is_none());
}
