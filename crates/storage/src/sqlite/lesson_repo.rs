use prep_core::model::{Lesson, LessonId};

use super::SqliteRepository;
use super::mapping::{db_err, lesson_from_row, outcome_from_rows};
use crate::repository::{LessonRepository, StorageError, UpsertOutcome};

#[async_trait::async_trait]
impl LessonRepository for SqliteRepository {
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<UpsertOutcome, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO lessons (id, chapter_id, title)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(lesson.id().as_str())
        .bind(lesson.chapter_id().as_str())
        .bind(lesson.title())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(outcome_from_rows(res.rows_affected()))
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        let row = sqlx::query("SELECT id, chapter_id, title FROM lessons WHERE id = ?1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.as_ref().map(lesson_from_row).transpose()
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let rows = sqlx::query("SELECT id, chapter_id, title FROM lessons ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(lesson_from_row).collect()
    }
}
