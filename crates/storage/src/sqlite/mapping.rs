use prep_core::model::{
    AnswerOption, Chapter, ChapterId, Lesson, LessonId, Question, QuestionId, Subject,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{StorageError, UpsertOutcome};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Classifies a driver error: constraint failures are reported separately from
/// connectivity problems.
pub(crate) fn db_err(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_foreign_key_violation()
                || db.is_unique_violation()
                || db.is_check_violation() =>
        {
            StorageError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::RowNotFound => StorageError::NotFound,
        _ => StorageError::Connection(e.to_string()),
    }
}

pub(crate) fn outcome_from_rows(rows_affected: u64) -> UpsertOutcome {
    if rows_affected == 0 {
        UpsertOutcome::Unchanged
    } else {
        UpsertOutcome::Created
    }
}

pub(crate) fn chapter_from_row(row: &SqliteRow) -> Result<Chapter, StorageError> {
    let subject: Subject = row
        .try_get::<String, _>("subject")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    Chapter::new(
        ChapterId::new(row.try_get::<String, _>("id").map_err(ser)?).map_err(ser)?,
        subject,
        row.try_get::<String, _>("title").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn lesson_from_row(row: &SqliteRow) -> Result<Lesson, StorageError> {
    Lesson::new(
        LessonId::new(row.try_get::<String, _>("id").map_err(ser)?).map_err(ser)?,
        ChapterId::new(row.try_get::<String, _>("chapter_id").map_err(ser)?).map_err(ser)?,
        row.try_get::<String, _>("title").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn option_from_row(row: &SqliteRow) -> Result<AnswerOption, StorageError> {
    let idx_i64: i64 = row.try_get("idx").map_err(ser)?;
    let idx = u32::try_from(idx_i64)
        .map_err(|_| StorageError::Serialization(format!("invalid option idx: {idx_i64}")))?;
    AnswerOption::new(
        idx,
        row.try_get::<String, _>("text").map_err(ser)?,
        row.try_get::<bool, _>("is_correct").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn question_from_row(
    row: &SqliteRow,
    options: Vec<AnswerOption>,
) -> Result<Question, StorageError> {
    let difficulty_i64: i64 = row.try_get("difficulty").map_err(ser)?;
    let difficulty = u8::try_from(difficulty_i64).map_err(|_| {
        StorageError::Serialization(format!("invalid difficulty: {difficulty_i64}"))
    })?;
    Question::new(
        QuestionId::new(row.try_get::<String, _>("id").map_err(ser)?).map_err(ser)?,
        ChapterId::new(row.try_get::<String, _>("chapter_id").map_err(ser)?).map_err(ser)?,
        row.try_get::<String, _>("text").map_err(ser)?,
        difficulty,
        options,
    )
    .map_err(ser)
}
