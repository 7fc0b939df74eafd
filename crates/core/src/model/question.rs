use std::collections::HashSet;

use crate::model::ids::{ChapterId, QuestionId};
use crate::model::ContentError;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// One answer choice of a question. `idx` defines display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    idx: u32,
    text: String,
    is_correct: bool,
}

impl AnswerOption {
    /// Creates an answer option.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyOptionText` if the text is blank.
    pub fn new(idx: u32, text: impl Into<String>, is_correct: bool) -> Result<Self, ContentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ContentError::EmptyOptionText);
        }
        Ok(Self {
            idx,
            text,
            is_correct,
        })
    }

    #[must_use]
    pub fn idx(&self) -> u32 {
        self.idx
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// An assessment item with an ordered set of options, exactly one correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    chapter_id: ChapterId,
    text: String,
    difficulty: u8,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question. Options are stored sorted by index.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the text is blank, the difficulty is outside
    /// `1..=5`, there are no options, two options share an index, or the
    /// number of correct options is not exactly one.
    pub fn new(
        id: QuestionId,
        chapter_id: ChapterId,
        text: impl Into<String>,
        difficulty: u8,
        mut options: Vec<AnswerOption>,
    ) -> Result<Self, ContentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ContentError::EmptyQuestionText);
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ContentError::InvalidDifficulty(difficulty));
        }
        if options.is_empty() {
            return Err(ContentError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.idx) {
                return Err(ContentError::DuplicateOptionIndex(option.idx));
            }
        }

        let correct = options.iter().filter(|o| o.is_correct).count();
        if correct != 1 {
            return Err(ContentError::CorrectOptionCount(correct));
        }

        options.sort_by_key(AnswerOption::idx);
        Ok(Self {
            id,
            chapter_id,
            text,
            difficulty,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// The single correct option.
    #[must_use]
    pub fn correct_option(&self) -> &AnswerOption {
        // Construction guarantees exactly one correct option.
        self.options
            .iter()
            .find(|o| o.is_correct)
            .unwrap_or(&self.options[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (QuestionId, ChapterId) {
        (
            QuestionId::new("q-1").unwrap(),
            ChapterId::new("phy-kinematics").unwrap(),
        )
    }

    fn opt(idx: u32, text: &str, correct: bool) -> AnswerOption {
        AnswerOption::new(idx, text, correct).unwrap()
    }

    #[test]
    fn options_are_sorted_by_index() {
        let (id, chapter) = ids();
        let q = Question::new(
            id,
            chapter,
            "Pick one",
            1,
            vec![opt(2, "c", true), opt(0, "a", false), opt(1, "b", false)],
        )
        .unwrap();
        let order: Vec<u32> = q.options().iter().map(AnswerOption::idx).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(q.correct_option().text(), "c");
    }

    #[test]
    fn rejects_zero_or_many_correct_options() {
        let (id, chapter) = ids();
        let none = Question::new(
            id.clone(),
            chapter.clone(),
            "Pick one",
            1,
            vec![opt(0, "a", false), opt(1, "b", false)],
        );
        assert_eq!(none.unwrap_err(), ContentError::CorrectOptionCount(0));

        let many = Question::new(
            id,
            chapter,
            "Pick one",
            1,
            vec![opt(0, "a", true), opt(1, "b", true)],
        );
        assert_eq!(many.unwrap_err(), ContentError::CorrectOptionCount(2));
    }

    #[test]
    fn rejects_duplicate_indexes() {
        let (id, chapter) = ids();
        let err = Question::new(
            id,
            chapter,
            "Pick one",
            1,
            vec![opt(0, "a", true), opt(0, "b", false)],
        )
        .unwrap_err();
        assert_eq!(err, ContentError::DuplicateOptionIndex(0));
    }

    #[test]
    fn rejects_out_of_range_difficulty_and_empty_options() {
        let (id, chapter) = ids();
        let err = Question::new(id.clone(), chapter.clone(), "Q", 0, vec![opt(0, "a", true)]);
        assert_eq!(err.unwrap_err(), ContentError::InvalidDifficulty(0));

        let err = Question::new(id, chapter, "Q", 1, Vec::new());
        assert_eq!(err.unwrap_err(), ContentError::NoOptions);
    }

    #[test]
    fn rejects_blank_option_text() {
        assert_eq!(
            AnswerOption::new(0, "", false).unwrap_err(),
            ContentError::EmptyOptionText
        );
    }
}
