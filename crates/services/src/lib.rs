#![forbid(unsafe_code)]

pub mod error;
pub mod fetcher;
pub mod store;
pub mod sync;

pub use course_core::Clock;

pub use error::{ConfigError, FetchError};
pub use fetcher::{
    DEFAULT_PROGRESS_URL, FetcherConfig, PROGRESS_URL_ENV, ProgressSource, RemoteProgressFetcher,
    fetch_remote_progress, parse_completion_document,
};
pub use store::{ApplyOutcome, CatalogStore, SyncScope, SyncTicket};
pub use sync::{FailurePolicy, ProgressSync, SyncOutcome, SyncReport};
