mod chapter;
mod ids;
mod lesson;
mod mock_test;
mod question;
mod subject;

pub use crate::error::ContentError;
pub use ids::{ChapterId, LessonId, ParseIdError, QuestionId, TestId};

pub use chapter::Chapter;
pub use lesson::{Lesson, LessonSummary};
pub use mock_test::{MockTest, TestKind};
pub use question::{AnswerOption, Question};
pub use subject::Subject;
