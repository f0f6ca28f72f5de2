use thiserror::Error;

use crate::source::SourceId;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while fetching or decoding one source response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("response from {url} is not valid JSON of the expected shape (body: {body})")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn network(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Network {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Returned when any of the dashboard sources could not be retrieved.
///
/// The message is intentionally generic; the failing source and the original
/// [`FetchError`] stay reachable through [`AggregationError::source_id`] and
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("failed to retrieve dashboard data")]
pub struct AggregationError {
    source_id: SourceId,
    #[source]
    source: FetchError,
}

impl AggregationError {
    pub fn new(source_id: SourceId, source: FetchError) -> Self {
        Self { source_id, source }
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn fetch_error(&self) -> &FetchError {
        &self.source
    }
}
