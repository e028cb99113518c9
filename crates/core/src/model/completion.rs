use std::collections::BTreeSet;

use crate::model::ids::LessonId;

/// Lesson ids the remote source currently reports as finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet(BTreeSet<LessonId>);

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: LessonId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<LessonId> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = LessonId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregate completion across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressOverview {
    pub done: usize,
    pub total: usize,
    pub percent: u8,
}

impl ProgressOverview {
    /// `percent` is `round(100 * done / total)`, or 0 for an empty catalog.
    #[must_use]
    pub fn new(done: usize, total: usize) -> Self {
        let done = done.min(total);
        let percent = if total == 0 {
            0
        } else {
            // Integer half-up rounding of 100 * done / total.
            ((done * 200 + total) / (total * 2)) as u8
        };
        Self {
            done,
            total,
            percent,
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}% completado", self.percent)
    }
}
