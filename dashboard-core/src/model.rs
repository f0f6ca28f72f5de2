use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A known place as returned by the `destinations` source.
///
/// Upstream records are loosely typed: any field may be absent or `null`.
/// Fields feeding the summary stay optional, the rest fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub best_time_to_visit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_dishes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_attractions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Current weather for a place, from the `weathers` source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub weather_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirportLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// An airport from the `airports` source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iata_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icao_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: AirportLocation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terminals: u32,
}

/// Flat view over the first match of every source. Each field is `None` when
/// its source returned no results; fields never depend on one another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub city: Option<String>,
    pub country: Option<String>,
    pub temperature: Option<f64>,
    pub weather: Option<String>,
    pub airport: Option<String>,
}

impl DashboardSummary {
    /// Build a summary from ranked source lists; only index 0 of each is used.
    pub fn from_sources(
        destinations: &[Destination],
        weathers: &[WeatherReading],
        airports: &[Airport],
    ) -> Self {
        let destination = destinations.first();
        let weather = weathers.first();

        Self {
            city: destination.and_then(|d| d.name.clone()),
            country: destination.and_then(|d| d.country.clone()),
            temperature: weather.and_then(|w| w.temperature),
            weather: weather.and_then(|w| w.weather_description.clone()),
            airport: airports.first().and_then(|a| a.name.clone()),
        }
    }
}

/// Raw result of one aggregation, as received from the three sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub query: String,
    pub fetched_at: DateTime<Utc>,
    pub destinations: Vec<Destination>,
    pub weathers: Vec<WeatherReading>,
    pub airports: Vec<Airport>,
}

impl DashboardReport {
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_sources(&self.destinations, &self.weathers, &self.airports)
    }
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
