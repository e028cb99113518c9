use std::collections::HashSet;
use std::sync::Arc;

use course_core::model::LessonId;
use dioxus::prelude::*;
use services::ProgressSync;

use crate::context::AppContext;

/// Re-render the calling component whenever the catalog store changes.
///
/// Read the returned signal during render to subscribe.
pub fn use_catalog_revision(ctx: &AppContext) -> Signal<u64> {
    let catalog = ctx.catalog();
    let mut revision = use_signal(|| catalog.revision());

    use_future(move || {
        let mut updates = catalog.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let current = *updates.borrow_and_update();
                revision.set(current);
            }
        }
    });

    revision
}

/// Lesson re-syncs currently in flight, shared by every screen.
#[derive(Clone, Copy, PartialEq)]
pub struct LessonSyncs {
    in_flight: Signal<HashSet<LessonId>>,
}

impl LessonSyncs {
    /// Reading this during render subscribes the caller.
    #[must_use]
    pub fn is_syncing(&self, id: LessonId) -> bool {
        self.in_flight.read().contains(&id)
    }

    /// Spawn a re-sync for `id` in the current scope. No-op while one is pending.
    pub fn start(mut self, sync: Arc<ProgressSync>, id: LessonId) {
        if !self.in_flight.write().insert(id) {
            return;
        }
        spawn(async move {
            sync.sync_lesson(id).await;
            self.in_flight.write().remove(&id);
        });
    }
}

pub fn use_lesson_syncs() -> LessonSyncs {
    let in_flight = use_signal(HashSet::new);
    LessonSyncs { in_flight }
}
