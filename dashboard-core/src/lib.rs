//! Core library for the `dashboard` CLI.
//!
//! This crate defines:
//! - Shared domain models (destinations, weather readings, airports, summaries)
//! - The source endpoints and the JSON fetcher abstraction over them
//! - The aggregator joining the three sources, and the message formatter
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod source;

pub use aggregator::Dashboard;
pub use config::Config;
pub use error::{AggregationError, FetchError};
pub use message::format_message;
pub use model::{
    Airport, AirportLocation, DashboardReport, DashboardSummary, Destination, WeatherReading,
};
pub use reqwest::Url;
pub use source::{Fetcher, ReqwestFetcher, SourceId};
