use thiserror::Error;

use crate::model::ParseIdError;

/// Validation failures raised while building domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("question text cannot be empty")]
    EmptyQuestionText,

    #[error("option text cannot be empty")]
    EmptyOptionText,

    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),

    #[error("question must have at least one option")]
    NoOptions,

    #[error("duplicate option index {0}")]
    DuplicateOptionIndex(u32),

    #[error("question must have exactly one correct option, found {0}")]
    CorrectOptionCount(usize),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}
