use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use services::{CatalogStore, ProgressSync};

pub trait UiApp: Send + Sync {
    fn progress_sync(&self) -> Arc<ProgressSync>;

    /// Intro overlay duration; `None` disables the overlay.
    fn splash_duration(&self) -> Option<Duration>;

    fn sync_on_launch(&self) -> bool {
        true
    }
}

#[derive(Clone)]
pub struct AppContext {
    progress_sync: Arc<ProgressSync>,
    catalog: Arc<CatalogStore>,
    splash_duration: Option<Duration>,
    sync_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let progress_sync = app.progress_sync();
        let catalog = progress_sync.store();

        Self {
            progress_sync,
            catalog,
            splash_duration: app.splash_duration(),
            sync_on_launch_once: Arc::new(AtomicBool::new(app.sync_on_launch())),
        }
    }

    #[must_use]
    pub fn progress_sync(&self) -> Arc<ProgressSync> {
        Arc::clone(&self.progress_sync)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogStore> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn splash_duration(&self) -> Option<Duration> {
        self.splash_duration
    }

    /// True exactly once per context when a launch sync is configured.
    #[must_use]
    pub fn take_sync_on_launch(&self) -> bool {
        self.sync_on_launch_once.swap(false, Ordering::AcqRel)
    }
}

// Provided by the application composition root (`crates/app`).

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
