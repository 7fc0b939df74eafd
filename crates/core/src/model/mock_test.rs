use serde::Serialize;
use std::fmt;

use crate::model::ids::TestId;
use crate::model::ContentError;

/// Category of a timed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Mock,
}

impl TestKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TestKind::Mock => "mock",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a timed test that mimics the exam format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTest {
    id: TestId,
    title: String,
    kind: TestKind,
    question_count: u32,
    duration_minutes: u32,
}

impl MockTest {
    /// Creates a test descriptor.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(
        id: TestId,
        title: impl Into<String>,
        kind: TestKind,
        question_count: u32,
        duration_minutes: u32,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            kind,
            question_count,
            duration_minutes,
        })
    }

    #[must_use]
    pub fn id(&self) -> &TestId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> TestKind {
        self.kind
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(TestKind::Mock.to_string(), "mock");
        assert_eq!(serde_json::to_string(&TestKind::Mock).unwrap(), "\"mock\"");
    }
}
