//! Fan-out over the three sources with an all-or-nothing join.

use std::sync::Arc;

use chrono::Utc;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::{
    error::{AggregationError, FetchError},
    model::{Airport, DashboardReport, DashboardSummary, Destination, WeatherReading},
    source::{Fetcher, SourceId, fetch_json, parse_base_url},
};

#[derive(Debug, Clone)]
pub struct Dashboard {
    base_url: Url,
    fetcher: Arc<dyn Fetcher>,
}

impl Dashboard {
    pub fn new(base_url: &str, fetcher: Arc<dyn Fetcher>) -> Result<Self, FetchError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { base_url, fetcher })
    }

    /// Query all three sources concurrently and return their raw lists.
    ///
    /// The first failure aborts the join; requests still in flight are dropped
    /// and nothing partial is returned.
    pub async fn fetch(&self, query: &str) -> Result<DashboardReport, AggregationError> {
        let (destinations, weathers, airports) = tokio::try_join!(
            self.fetch_source::<Destination>(SourceId::Destinations, query),
            self.fetch_source::<WeatherReading>(SourceId::Weathers, query),
            self.fetch_source::<Airport>(SourceId::Airports, query),
        )
        .inspect_err(|e| {
            error!(
                source_id = %e.source_id(),
                cause = %e.fetch_error(),
                "dashboard aggregation failed"
            );
        })?;

        info!(
            query,
            destinations = destinations.len(),
            weathers = weathers.len(),
            airports = airports.len(),
            "dashboard sources fetched"
        );

        Ok(DashboardReport {
            query: query.to_string(),
            fetched_at: Utc::now(),
            destinations,
            weathers,
            airports,
        })
    }

    pub async fn get_dashboard_data(
        &self,
        query: &str,
    ) -> Result<DashboardSummary, AggregationError> {
        Ok(self.fetch(query).await?.summary())
    }

    async fn fetch_source<T: DeserializeOwned>(
        &self,
        id: SourceId,
        query: &str,
    ) -> Result<Vec<T>, AggregationError> {
        let url = id.url(&self.base_url, query).map_err(|e| AggregationError::new(id, e))?;
        debug!(source_id = %id, %url, "fetching source");

        fetch_json(self.fetcher.as_ref(), &url)
            .await
            .map_err(|e| AggregationError::new(id, e))
    }
}
