use std::sync::Arc;

use futures::future::try_join_all;
use prep_core::catalog::SeedDataset;
use storage::repository::{
    ChapterRepository, LessonRepository, QuestionRepository, UpsertOutcome,
};
use tracing::{error, info};

use crate::error::SeedError;

/// Counts reported after a successful seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Chapters processed, whether created or already present.
    pub chapters_count: usize,
    /// Rows written by this run.
    pub created: usize,
    /// Rows that already existed and were left as they were.
    pub unchanged: usize,
}

impl SeedReport {
    fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Writes the baseline dataset into the content store.
///
/// Every write is create-if-absent, so running the seed again never duplicates
/// rows and never refreshes rows written by an earlier run.
#[derive(Clone)]
pub struct SeedService {
    chapters: Arc<dyn ChapterRepository>,
    lessons: Arc<dyn LessonRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl SeedService {
    #[must_use]
    pub fn new(
        chapters: Arc<dyn ChapterRepository>,
        lessons: Arc<dyn LessonRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            chapters,
            lessons,
            questions,
        }
    }

    /// Seed the built-in demo dataset.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Storage` for the first persistence failure; later
    /// steps are not attempted.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        let dataset = SeedDataset::demo()?;
        self.seed(&dataset).await
    }

    /// Seed an arbitrary dataset with the same ordering rules as [`SeedService::run`].
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Storage` for the first persistence failure.
    pub async fn seed(&self, dataset: &SeedDataset) -> Result<SeedReport, SeedError> {
        match self.write(dataset).await {
            Ok(report) => {
                info!(
                    chapters = report.chapters_count,
                    created = report.created,
                    unchanged = report.unchanged,
                    "seed completed"
                );
                Ok(report)
            }
            Err(err) => {
                error!(error = %err, "seed failed");
                Err(err)
            }
        }
    }

    async fn write(&self, dataset: &SeedDataset) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport {
            chapters_count: 0,
            created: 0,
            unchanged: 0,
        };

        // Chapter writes are independent of each other.
        let outcomes = try_join_all(
            dataset
                .chapters
                .iter()
                .map(|chapter| self.chapters.upsert_chapter(chapter)),
        )
        .await?;
        report.chapters_count = outcomes.len();
        for outcome in outcomes {
            report.record(outcome);
        }

        // Lessons and questions reference chapters, so they run after the batch.
        for lesson in &dataset.lessons {
            report.record(self.lessons.upsert_lesson(lesson).await?);
        }
        for question in &dataset.questions {
            report.record(self.questions.upsert_question(question).await?);
        }

        Ok(report)
    }
}
