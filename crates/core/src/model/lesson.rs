use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id must be > 0")]
    ZeroId,

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("duplicate lesson id {0}")]
    DuplicateId(LessonId),
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Binary completion state of a lesson.
///
/// Displayed as a percentage, but only ever 0 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Progress {
    #[default]
    NotStarted,
    Completed,
}

impl Progress {
    #[must_use]
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::NotStarted
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::Completed => 100,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One course unit.
///
/// Display fields are fixed at construction; `progress` is only written by
/// [`LessonCatalog`](crate::model::LessonCatalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    duration: String,
    progress: Progress,
}

impl Lesson {
    /// Creates a not-started lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` if the title is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Result<Self, LessonError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            duration: duration.into(),
            progress: Progress::NotStarted,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.progress.is_completed()
    }

    pub(crate) fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }
}
