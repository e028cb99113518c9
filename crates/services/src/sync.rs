use std::sync::Arc;

use course_core::model::{CompletionSet, LessonId, ProgressOverview};

use crate::Clock;
use crate::fetcher::ProgressSource;
use crate::store::{ApplyOutcome, CatalogStore, SyncScope, SyncTicket};

/// What to do with the catalog when the source fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// A failed fetch counts as "nothing completed" and resets progress.
    #[default]
    ResetToEmpty,
    /// A failed fetch leaves the catalog as it was.
    KeepCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied { completed: CompletionSet },
    /// A newer sync already wrote every lesson in scope.
    Superseded,
    /// The fetch failed and the policy kept the catalog untouched.
    Skipped,
    UnknownLesson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub ticket: SyncTicket,
    pub outcome: SyncOutcome,
    pub overview: ProgressOverview,
}

impl SyncReport {
    #[must_use]
    pub fn applied(&self) -> bool {
        matches!(self.outcome, SyncOutcome::Applied { .. })
    }
}

/// Fetches remote completion and merges it into the catalog store.
///
/// Every call fetches once; the store notifies subscribers after the merge.
/// Errors are absorbed according to the failure policy.
#[derive(Clone)]
pub struct ProgressSync {
    clock: Clock,
    source: Arc<dyn ProgressSource>,
    store: Arc<CatalogStore>,
    policy: FailurePolicy,
}

impl ProgressSync {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn ProgressSource>, store: Arc<CatalogStore>) -> Self {
        Self {
            clock,
            source,
            store,
            policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn store(&self) -> Arc<CatalogStore> {
        Arc::clone(&self.store)
    }

    /// Overwrite every lesson's progress from a fresh fetch.
    pub async fn sync_all(&self) -> SyncReport {
        self.sync(SyncScope::All).await
    }

    /// Refresh a single lesson from a fresh fetch; other lessons are left alone.
    pub async fn sync_lesson(&self, id: LessonId) -> SyncReport {
        self.sync(SyncScope::Lesson(id)).await
    }

    #[tracing::instrument(skip(self), fields(ticket))]
    async fn sync(&self, scope: SyncScope) -> SyncReport {
        let ticket = self.store.begin_sync();
        tracing::Span::current().record("ticket", ticket.generation());

        let completed = match self.source.fetch_completed().await {
            Ok(completed) => completed,
            Err(err) => match self.policy {
                FailurePolicy::ResetToEmpty => {
                    tracing::warn!(error = %err, "progress fetch failed, resetting to empty");
                    CompletionSet::new()
                }
                FailurePolicy::KeepCurrent => {
                    tracing::warn!(error = %err, "progress fetch failed, keeping current progress");
                    return self.report(ticket, SyncOutcome::Skipped);
                }
            },
        };

        let outcome = match self
            .store
            .apply_ticketed(ticket, scope, &completed, self.clock.now())
        {
            ApplyOutcome::Applied { changed } => {
                tracing::info!(completed = completed.len(), changed, "progress synced");
                SyncOutcome::Applied { completed }
            }
            ApplyOutcome::Superseded => {
                tracing::debug!("sync result superseded by a newer sync");
                SyncOutcome::Superseded
            }
            ApplyOutcome::UnknownLesson => {
                tracing::debug!("sync requested for a lesson outside the catalog");
                SyncOutcome::UnknownLesson
            }
        };
        self.report(ticket, outcome)
    }

    fn report(&self, ticket: SyncTicket, outcome: SyncOutcome) -> SyncReport {
        SyncReport {
            ticket,
            outcome,
            overview: self.store.overview(),
        }
    }
}
