use course_core::model::{Lesson, LessonId};

pub const COMPLETED_LABEL: &str = "Completada (sincronizada)";
pub const NOT_COMPLETED_LABEL: &str = "No completada";

/// One row of the lesson list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub thumb: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub completed: bool,
}

impl From<&Lesson> for LessonRowVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id(),
            thumb: lesson.id().to_string(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            duration: lesson.duration().to_string(),
            completed: lesson.is_completed(),
        }
    }
}

#[must_use]
pub fn map_lesson_rows(lessons: &[Lesson]) -> Vec<LessonRowVm> {
    lessons.iter().map(LessonRowVm::from).collect()
}

/// Lesson detail panel with its synced completion label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub status_label: &'static str,
    pub completed: bool,
}

impl From<&Lesson> for LessonDetailVm {
    fn from(lesson: &Lesson) -> Self {
        let completed = lesson.is_completed();
        Self {
            id: lesson.id(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            duration: lesson.duration().to_string(),
            status_label: if completed {
                COMPLETED_LABEL
            } else {
                NOT_COMPLETED_LABEL
            },
            completed,
        }
    }
}
