use async_trait::async_trait;
use course_core::model::{CompletionSet, LessonId};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, FetchError};

/// Where the course publishes its completion document.
pub const DEFAULT_PROGRESS_URL: &str = "https://juandevyt.github.io/api-design-curso/app.json";

/// Environment variable overriding [`DEFAULT_PROGRESS_URL`].
pub const PROGRESS_URL_ENV: &str = "COURSE_PROGRESS_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetcherConfig {
    pub endpoint: Url,
}

impl FetcherConfig {
    /// Parse and validate an endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse or is not http(s).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEndpoint {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(endpoint.scheme().to_string()));
        }
        Ok(Self { endpoint })
    }

    /// Resolve a raw `COURSE_PROGRESS_URL` value. Unset or blank means the
    /// built-in endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value is not a valid http(s) URL.
    pub fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_PROGRESS_URL).expect("built-in progress URL is valid"),
        }
    }
}

/// Anything that can report which lessons are completed.
#[async_trait]
pub trait ProgressSource: Send + Sync {
    /// Fetch the current completed-id set.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the source cannot be reached or decoded.
    async fn fetch_completed(&self) -> Result<CompletionSet, FetchError>;
}

/// Reads completion state from the remote JSON endpoint.
#[derive(Clone)]
pub struct RemoteProgressFetcher {
    client: Client,
    config: FetcherConfig,
}

impl RemoteProgressFetcher {
    #[must_use]
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ProgressSource for RemoteProgressFetcher {
    #[tracing::instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn fetch_completed(&self) -> Result<CompletionSet, FetchError> {
        let response = self
            .client
            .get(self.config.endpoint.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let completed = parse_completion_document(&body)?;
        tracing::debug!(completed = completed.len(), "fetched remote progress");
        Ok(completed)
    }
}

/// Fetch from `source`, treating every failure as "nothing completed".
///
/// Callers cannot tell an unreachable source from one reporting zero
/// completions. Use [`ProgressSource::fetch_completed`] to see the error.
pub async fn fetch_remote_progress(source: &dyn ProgressSource) -> CompletionSet {
    match source.fetch_completed().await {
        Ok(completed) => completed,
        Err(err) => {
            tracing::warn!(error = %err, "remote progress unavailable, using empty set");
            CompletionSet::new()
        }
    }
}

/// Decode a `{ "progreso_curso": { "lecciones": [...] } }` document.
///
/// Missing or null nesting yields an empty set. Entries count only when
/// `completada` is `true` and `id` is a positive integer (number or numeric
/// string).
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not JSON of that shape.
pub fn parse_completion_document(body: &[u8]) -> Result<CompletionSet, FetchError> {
    let document: ProgressDocument = serde_json::from_slice(body)?;
    let entries = document
        .progreso_curso
        .and_then(|course| course.lecciones)
        .unwrap_or_default();

    Ok(entries
        .into_iter()
        .filter(|entry| entry.completada == Some(true))
        .filter_map(|entry| entry.id.and_then(RemoteLessonId::to_lesson_id))
        .collect())
}

#[derive(Debug, Deserialize)]
struct ProgressDocument {
    #[serde(default)]
    progreso_curso: Option<CourseProgress>,
}

#[derive(Debug, Deserialize)]
struct CourseProgress {
    #[serde(default)]
    lecciones: Option<Vec<RemoteLesson>>,
}

#[derive(Debug, Deserialize)]
struct RemoteLesson {
    #[serde(default)]
    id: Option<RemoteLessonId>,
    #[serde(default)]
    completada: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteLessonId {
    Int(u64),
    Float(f64),
    Text(String),
}

impl RemoteLessonId {
    fn to_lesson_id(self) -> Option<LessonId> {
        let value = match self {
            Self::Int(value) => value,
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::Float(value) if value.fract() == 0.0 && value >= 1.0 => value as u64,
            Self::Float(_) => return None,
            Self::Text(raw) => return raw.parse().ok(),
        };
        LessonId::new(value).ok()
    }
}
