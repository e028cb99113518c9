mod lesson_vm;
mod overview_vm;
mod time_fmt;

pub use lesson_vm::{
    COMPLETED_LABEL, LessonDetailVm, LessonRowVm, NOT_COMPLETED_LABEL, map_lesson_rows,
};
pub use overview_vm::OverviewVm;
