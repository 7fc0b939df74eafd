use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ContentError;

/// Exam subject a chapter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Biology];

    /// Storage and wire representation (`PHYSICS`, `CHEMISTRY`, `BIOLOGY`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Physics => "PHYSICS",
            Subject::Chemistry => "CHEMISTRY",
            Subject::Biology => "BIOLOGY",
        }
    }

    /// Human-readable label used by the page shell.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHYSICS" => Ok(Subject::Physics),
            "CHEMISTRY" => Ok(Subject::Chemistry),
            "BIOLOGY" => Ok(Subject::Biology),
            other => Err(ContentError::UnknownSubject(other.to_string())),
        }
    }
}
