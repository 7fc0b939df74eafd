use std::collections::HashMap;

use prep_core::model::{AnswerOption, Question, QuestionId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{db_err, option_from_row, outcome_from_rows, question_from_row, ser};
use crate::repository::{QuestionRepository, StorageError, UpsertOutcome};

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn upsert_question(&self, question: &Question) -> Result<UpsertOutcome, StorageError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let res = sqlx::query(
            r"
            INSERT INTO questions (id, chapter_id, text, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(question.id().as_str())
        .bind(question.chapter_id().as_str())
        .bind(question.text())
        .bind(i64::from(question.difficulty()))
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        let outcome = outcome_from_rows(res.rows_affected());
        if outcome.is_created() {
            for option in question.options() {
                sqlx::query(
                    r"
                    INSERT INTO options (question_id, idx, text, is_correct)
                    VALUES (?1, ?2, ?3, ?4)
                    ",
                )
                .bind(question.id().as_str())
                .bind(i64::from(option.idx()))
                .bind(option.text())
                .bind(option.is_correct())
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
            }
        }

        tx.commit().await.map_err(db_err)?;
        Ok(outcome)
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, StorageError> {
        let Some(row) = sqlx::query(
            "SELECT id, chapter_id, text, difficulty FROM questions WHERE id = ?1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        else {
            return Ok(None);
        };

        let option_rows = sqlx::query(
            r"
            SELECT idx, text, is_correct
            FROM options
            WHERE question_id = ?1
            ORDER BY idx ASC
            ",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let options = option_rows
            .iter()
            .map(option_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        question_from_row(&row, options).map(Some)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, chapter_id, text, difficulty FROM questions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let option_rows = sqlx::query(
            r"
            SELECT question_id, idx, text, is_correct
            FROM options
            ORDER BY question_id ASC, idx ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut by_question: HashMap<String, Vec<AnswerOption>> = HashMap::new();
        for row in &option_rows {
            let question_id: String = row.try_get("question_id").map_err(ser)?;
            by_question
                .entry(question_id)
                .or_default()
                .push(option_from_row(row)?);
        }

        let mut questions = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.try_get("id").map_err(ser)?;
            let options = by_question.remove(&id).unwrap_or_default();
            questions.push(question_from_row(row, options)?);
        }
        Ok(questions)
    }
}
