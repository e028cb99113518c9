mod course;
mod lessons;
mod overview;
mod panels;
mod state;

pub use course::CourseView;
pub use lessons::{LessonDetail, LessonList};
pub use overview::ProgressOverviewBar;
pub use panels::{AboutPanel, CatalogInfo};
pub use state::{LessonSyncs, use_catalog_revision, use_lesson_syncs};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
