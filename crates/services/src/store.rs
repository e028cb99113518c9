use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use course_core::model::{CompletionSet, Lesson, LessonCatalog, LessonId, ProgressOverview};
use tokio::sync::watch;

/// Generation handed out when a sync starts.
///
/// Later tickets win: a lesson written by ticket `n` ignores results
/// carried by any ticket `<= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyncTicket(u64);

impl SyncTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Which lessons a sync result may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    All,
    Lesson(LessonId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// At least one lesson was written. `changed` is false when every
    /// written lesson already had that progress.
    Applied { changed: bool },
    /// Every lesson in scope was already written by a newer sync.
    Superseded,
    UnknownLesson,
}

struct StoreState {
    catalog: LessonCatalog,
    issued: u64,
    written: HashMap<LessonId, u64>,
    last_synced_at: Option<DateTime<Utc>>,
}

/// Owner of the lesson catalog shared by the synchronizer and the views.
///
/// Views read snapshots and subscribe to revisions; only sync results
/// mutate progress.
pub struct CatalogStore {
    state: Mutex<StoreState>,
    revision: watch::Sender<u64>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: LessonCatalog) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Mutex::new(StoreState {
                catalog,
                issued: 0,
                written: HashMap::new(),
                last_synced_at: None,
            }),
            revision,
        }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(LessonCatalog::seed())
    }

    // Catalog updates cannot panic halfway, so a poisoned lock still guards
    // consistent data.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn lessons(&self) -> Vec<Lesson> {
        self.state().catalog.lessons().to_vec()
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<Lesson> {
        self.state().catalog.get(id).cloned()
    }

    #[must_use]
    pub fn overview(&self) -> ProgressOverview {
        self.state().catalog.overview()
    }

    #[must_use]
    pub fn next_incomplete(&self) -> Option<Lesson> {
        self.state().catalog.next_incomplete().cloned()
    }

    #[must_use]
    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.state().last_synced_at
    }

    /// Current revision; bumped after every applied write.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver notified after each applied write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Reserve a generation for a sync that is about to fetch.
    pub fn begin_sync(&self) -> SyncTicket {
        let mut state = self.state();
        state.issued += 1;
        SyncTicket(state.issued)
    }

    /// Full overwrite from `completed`, newer than any sync issued so far.
    pub fn apply_completion_set(&self, completed: &CompletionSet, at: DateTime<Utc>) -> bool {
        let ticket = self.begin_sync();
        matches!(
            self.apply_ticketed(ticket, SyncScope::All, completed, at),
            ApplyOutcome::Applied { changed: true }
        )
    }

    /// Write `completed` into the lessons in `scope` that no newer ticket
    /// has written yet, then notify subscribers.
    pub fn apply_ticketed(
        &self,
        ticket: SyncTicket,
        scope: SyncScope,
        completed: &CompletionSet,
        at: DateTime<Utc>,
    ) -> ApplyOutcome {
        let outcome = {
            let mut state = self.state();
            let targets: Vec<LessonId> = match scope {
                SyncScope::All => state.catalog.ids().collect(),
                SyncScope::Lesson(id) if state.catalog.get(id).is_some() => vec![id],
                SyncScope::Lesson(_) => return ApplyOutcome::UnknownLesson,
            };

            let mut written = 0usize;
            let mut changed = false;
            for id in targets {
                let last = state.written.get(&id).copied().unwrap_or(0);
                if ticket.0 <= last {
                    continue;
                }
                let before = state.catalog.get(id).map(Lesson::progress);
                let after = state.catalog.apply_lesson(id, completed);
                changed |= before != after;
                state.written.insert(id, ticket.0);
                written += 1;
            }

            if written == 0 {
                ApplyOutcome::Superseded
            } else {
                state.last_synced_at = Some(at);
                ApplyOutcome::Applied { changed }
            }
        };

        if matches!(outcome, ApplyOutcome::Applied { .. }) {
            self.revision.send_modify(|revision| *revision += 1);
        }
        outcome
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}
