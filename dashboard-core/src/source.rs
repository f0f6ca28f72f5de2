use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::FetchError;

pub mod http;

pub use http::ReqwestFetcher;

/// The three upstream sources the dashboard is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    Destinations,
    Weathers,
    Airports,
}

impl SourceId {
    /// Endpoint path segment, relative to the base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Destinations => "destinations",
            SourceId::Weathers => "weathers",
            SourceId::Airports => "airports",
        }
    }

    pub const fn all() -> &'static [SourceId] {
        &[SourceId::Destinations, SourceId::Weathers, SourceId::Airports]
    }

    /// `{base}/{endpoint}?search={query}`, with the query percent-encoded.
    pub fn url(&self, base: &Url, query: &str) -> Result<Url, FetchError> {
        let mut url = base.clone();

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                url: base.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(self.as_str());

        url.query_pairs_mut().clear().append_pair("search", query);

        Ok(url)
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport used by the aggregator: a plain GET returning the body text.
///
/// HTTP status codes are not inspected; a non-JSON error page surfaces as a
/// decode failure in [`fetch_json`].
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<String, FetchError>;
}

/// GET `url` and decode the body as `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    url: &Url,
) -> Result<T, FetchError> {
    let body = fetcher.get(url).await?;

    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        body: truncate_body(&body),
        source,
    })
}

/// Parse a configured base URL, rejecting ones that cannot take endpoint paths.
pub fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "base URL cannot carry a path".to_string(),
        });
    }

    Ok(url)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
