mod catalog;
mod completion;
mod ids;
mod lesson;

pub use catalog::LessonCatalog;
pub use completion::{CompletionSet, ProgressOverview};
pub use ids::{LessonId, ParseIdError};
pub use lesson::{Lesson, LessonError, Progress};
