use prep_core::model::{Chapter, ChapterId};

use super::SqliteRepository;
use super::mapping::{chapter_from_row, db_err, outcome_from_rows};
use crate::repository::{ChapterRepository, StorageError, UpsertOutcome};

#[async_trait::async_trait]
impl ChapterRepository for SqliteRepository {
    async fn upsert_chapter(&self, chapter: &Chapter) -> Result<UpsertOutcome, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO chapters (id, subject, title)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(chapter.id().as_str())
        .bind(chapter.subject().as_str())
        .bind(chapter.title())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(outcome_from_rows(res.rows_affected()))
    }

    async fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StorageError> {
        let row = sqlx::query("SELECT id, subject, title FROM chapters WHERE id = ?1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.as_ref().map(chapter_from_row).transpose()
    }

    async fn list_chapters(&self) -> Result<Vec<Chapter>, StorageError> {
        let rows = sqlx::query("SELECT id, subject, title FROM chapters ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(chapter_from_row).collect()
    }
}
