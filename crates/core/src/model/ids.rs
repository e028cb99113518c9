use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::lesson::LessonError;

/// Stable identity of a lesson, shared with the remote progress source.
///
/// Always positive; zero is rejected at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct LessonId(u64);

impl LessonId {
    /// Creates a new `LessonId`.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::ZeroId` when `id` is zero.
    pub fn new(id: u64) -> Result<Self, LessonError> {
        if id == 0 {
            return Err(LessonError::ZeroId);
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for LessonId {
    type Error = LessonError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LessonId> for u64 {
    fn from(id: LessonId) -> Self {
        id.0
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `LessonId` from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse lesson id from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for LessonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(|value| LessonId::new(value).ok())
            .ok_or_else(|| ParseIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
