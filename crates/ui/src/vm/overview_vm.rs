use chrono::{DateTime, Utc};
use course_core::model::ProgressOverview;

use crate::vm::time_fmt::format_sync_time;

/// Progress bar state for the course header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewVm {
    pub percent: u8,
    pub bar_width: String,
    pub label: String,
    pub done_label: String,
    pub synced_label: Option<String>,
}

impl OverviewVm {
    #[must_use]
    pub fn new(overview: ProgressOverview, synced_at: Option<DateTime<Utc>>) -> Self {
        Self {
            percent: overview.percent,
            bar_width: format!("{}%", overview.percent),
            label: overview.label(),
            done_label: format!("{} de {} lecciones", overview.done, overview.total),
            synced_label: synced_at.map(|at| format!("Sincronizado: {}", format_sync_time(at))),
        }
    }
}
