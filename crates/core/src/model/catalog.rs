use std::collections::HashSet;

use crate::model::completion::{CompletionSet, ProgressOverview};
use crate::model::ids::LessonId;
use crate::model::lesson::{Lesson, LessonError, Progress};

/// (id, title, description, duration) for the built-in course.
const SEED: [(u64, &str, &str, &str); 6] = [
    (1, "Introducción al Diseño", "Conceptos y herramientas", "18m"),
    (2, "Tipografía", "Elegir y combinar tipografías", "34m"),
    (3, "Color y Teoría", "Paletas, armonía y accesibilidad", "46m"),
    (4, "Composición y layout", "Grid, jerarquía y balance", "52m"),
    (5, "Branding Básico", "Logotipos y sistemas visuales", "38m"),
    (6, "Reto práctico", "Proyecto paso a paso", "72m"),
];

/// Ordered set of lessons with unique ids.
///
/// Lessons are created once and only their progress changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Builds a catalog from lessons in display order.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::DuplicateId` if two lessons share an id.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, LessonError> {
        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(LessonError::DuplicateId(lesson.id()));
            }
        }
        Ok(Self { lessons })
    }

    /// The six-lesson design course, all not started.
    #[must_use]
    pub fn seed() -> Self {
        let lessons = SEED
            .iter()
            .filter_map(|(id, title, desc, time)| {
                let id = LessonId::new(*id).ok()?;
                Lesson::new(id, *title, *desc, *time).ok()
            })
            .collect();
        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn get(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.lessons.iter().map(Lesson::id)
    }

    /// Overwrites every lesson: completed iff its id is in `completed`.
    ///
    /// Lessons absent from `completed` are reset, even if they were
    /// completed before. Returns `true` if any lesson changed.
    pub fn apply_completion_set(&mut self, completed: &CompletionSet) -> bool {
        let mut changed = false;
        for lesson in &mut self.lessons {
            changed |= overwrite(lesson, completed);
        }
        changed
    }

    /// Overwrites a single lesson from `completed`.
    ///
    /// Returns the new progress, or `None` if `id` is not in the catalog.
    pub fn apply_lesson(&mut self, id: LessonId, completed: &CompletionSet) -> Option<Progress> {
        let lesson = self.lessons.iter_mut().find(|lesson| lesson.id() == id)?;
        overwrite(lesson, completed);
        Some(lesson.progress())
    }

    #[must_use]
    pub fn overview(&self) -> ProgressOverview {
        let done = self.lessons.iter().filter(|l| l.is_completed()).count();
        ProgressOverview::new(done, self.lessons.len())
    }

    /// First lesson not yet completed, falling back to the first lesson.
    #[must_use]
    pub fn next_incomplete(&self) -> Option<&Lesson> {
        self.lessons
            .iter()
            .find(|lesson| !lesson.is_completed())
            .or_else(|| self.lessons.first())
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn overwrite(lesson: &mut Lesson, completed: &CompletionSet) -> bool {
    let next = Progress::from_completed(completed.contains(lesson.id()));
    let changed = lesson.progress() != next;
    lesson.set_progress(next);
    changed
}
