//! Built-in content: the demo dataset written by the seed operation and the
//! fixed lesson and test listings served alongside it.

use crate::model::{
    AnswerOption, Chapter, ChapterId, ContentError, Lesson, LessonId, LessonSummary, MockTest,
    Question, QuestionId, Subject, TestId, TestKind,
};

/// Baseline rows for first-run bootstrapping and demos.
#[derive(Debug, Clone)]
pub struct SeedDataset {
    pub chapters: Vec<Chapter>,
    pub lessons: Vec<Lesson>,
    pub questions: Vec<Question>,
}

impl SeedDataset {
    /// The demo dataset: three chapters, one lesson and one question with four options.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if any built-in value fails validation.
    pub fn demo() -> Result<Self, ContentError> {
        let kinematics = ChapterId::new("phy-kinematics")?;

        let chapters = vec![
            Chapter::new(kinematics.clone(), Subject::Physics, "Kinematics")?,
            Chapter::new(
                ChapterId::new("chem-bonding")?,
                Subject::Chemistry,
                "Chemical Bonding",
            )?,
            Chapter::new(ChapterId::new("bio-cell")?, Subject::Biology, "Cell Structure")?,
        ];

        let lessons = vec![Lesson::new(
            LessonId::new("lesson-kinematics-1")?,
            kinematics.clone(),
            "Displacement and Velocity",
        )?];

        let questions = vec![Question::new(
            QuestionId::new("q-kin-1")?,
            kinematics,
            "A particle moves with constant velocity of 5 m/s. What is the displacement after 4 s?",
            1,
            vec![
                AnswerOption::new(0, "10 m", false)?,
                AnswerOption::new(1, "15 m", false)?,
                AnswerOption::new(2, "20 m", true)?,
                AnswerOption::new(3, "25 m", false)?,
            ],
        )?];

        Ok(Self {
            chapters,
            lessons,
            questions,
        })
    }
}

/// Lesson listing, in display order.
#[must_use]
pub fn lesson_summaries() -> Vec<LessonSummary> {
    vec![
        LessonSummary::new("phy-kinematics-1", Subject::Physics, "Kinematics I"),
        LessonSummary::new("chem-bonding-1", Subject::Chemistry, "Chemical Bonding I"),
        LessonSummary::new("bio-cell-1", Subject::Biology, "Cell Structure I"),
    ]
}

/// Mock test listing, in display order.
///
/// # Errors
///
/// Returns `ContentError` if any built-in value fails validation.
pub fn mock_tests() -> Result<Vec<MockTest>, ContentError> {
    Ok(vec![
        MockTest::new(TestId::new("quick-45")?, "Quick 45", TestKind::Mock, 45, 45)?,
        MockTest::new(TestId::new("full-neet")?, "Full NEET", TestKind::Mock, 180, 200)?,
    ])
}
