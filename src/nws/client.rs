//! Typed client over the National Weather Service web API.
//!
//! One [`NwsClient`] owns the shared request configuration (identifying
//! `User-Agent` header, bounded timeout, base host) and exposes the chain of
//! endpoint calls as typed operations: zone catalog, zone forecast, zone
//! stations, station coordinate, grid point and hourly forecast. Each call
//! is a single blocking GET; callers sequence them because every step
//! depends on the previous result.

use crate::nws::error::NwsError;
use crate::nws::models::{
    GridPointPayload, HourlyForecastPayload, HourlyPeriod, StationPayload, ZoneCollection,
    ZoneDetailPayload, ZoneForecastPayload,
};
use crate::types::forecast::Forecast;
use crate::types::station::{LatLon, Station};
use crate::types::zone::{Zone, ZoneCatalog};
use bon::bon;
use chrono::DateTime;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_USER_AGENT: &str = concat!("zonecast/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The client for the weather API.
///
/// Construct it once with [`NwsClient::builder`] and reuse it for every
/// request of the session; the underlying HTTP client, the identifying
/// header and the request timeout are shared by all calls.
///
/// # Examples
///
/// ```no_run
/// use zonecast::{NwsClient, NwsError};
///
/// # async fn run() -> Result<(), NwsError> {
/// let client = NwsClient::builder().build()?;
/// let catalog = client.zone_catalog().await?;
/// println!("{} land zones", catalog.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
}

#[bon]
impl NwsClient {
    /// Creates a client.
    ///
    /// All parameters are optional: `base_url` defaults to the public API
    /// host (tests point it at a local mock server), `user_agent` to this
    /// crate's name and version, and `timeout` to 10 seconds per request.
    ///
    /// # Errors
    ///
    /// Returns [`NwsError::ClientBuild`] if the HTTP client cannot be
    /// constructed, for example when the user agent is not a valid header
    /// value.
    #[builder]
    pub fn new(
        base_url: Option<String>,
        user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NwsError> {
        let http = Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(NwsError::ClientBuild)?;
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self { http, base_url })
    }

    /// Fetches the catalog of all land zones.
    ///
    /// Zone features whose payload carries no state code are skipped; they
    /// cannot be reached from the state picker.
    pub async fn zone_catalog(&self) -> Result<ZoneCatalog, NwsError> {
        let url = format!("{}/zones/land", self.base_url);
        let payload: ZoneCollection = self.get_json(&url).await?;
        let zones = payload
            .features
            .into_iter()
            .filter_map(|feature| {
                let state = feature.properties.state?;
                let id = feature
                    .id
                    .rsplit('/')
                    .next()
                    .unwrap_or(feature.id.as_str())
                    .to_string();
                Some(Zone {
                    state,
                    id,
                    url: feature.id,
                })
            })
            .collect();
        Ok(ZoneCatalog::new(zones))
    }

    /// Fetches the daily forecast for a zone: one entry per named period,
    /// in response order.
    pub async fn zone_forecast(&self, zone: &Zone) -> Result<Forecast, NwsError> {
        let url = format!("{}/forecast", zone.url);
        let payload: ZoneForecastPayload = self.get_json(&url).await?;
        let mut forecast = Forecast::new();
        for period in payload.properties.periods {
            forecast.insert(period.name, period.detailed_forecast);
        }
        Ok(forecast)
    }

    /// Fetches the zone's observation-station references.
    pub async fn zone_stations(&self, zone: &Zone) -> Result<Vec<Station>, NwsError> {
        let payload: ZoneDetailPayload = self.get_json(&zone.url).await?;
        Ok(payload
            .properties
            .observation_stations
            .into_iter()
            .map(Station::new)
            .collect())
    }

    /// Resolves a station to its latitude/longitude pair.
    ///
    /// The payload's GeoJSON geometry lists longitude first; the returned
    /// [`LatLon`] is swapped into latitude-first order.
    pub async fn station_coordinate(&self, station: &Station) -> Result<LatLon, NwsError> {
        let payload: StationPayload = self.get_json(&station.url).await?;
        let coordinates = &payload.geometry.coordinates;
        if coordinates.len() < 2 {
            return Err(NwsError::MissingField {
                url: station.url.clone(),
                field: "geometry.coordinates",
            });
        }
        Ok(LatLon(coordinates[1], coordinates[0]))
    }

    /// Converts a coordinate to the grid point's hourly forecast URL.
    pub async fn hourly_forecast_url(&self, coordinate: LatLon) -> Result<String, NwsError> {
        let url = format!("{}/points/{},{}", self.base_url, coordinate.0, coordinate.1);
        let payload: GridPointPayload = self.get_json(&url).await?;
        Ok(payload.properties.forecast_hourly)
    }

    /// Fetches the hourly forecast behind a grid point reference: one entry
    /// per period, labelled by the hour of day of the period's start time.
    pub async fn hourly_forecast(&self, url: &str) -> Result<Forecast, NwsError> {
        let payload: HourlyForecastPayload = self.get_json(url).await?;
        let mut forecast = Forecast::new();
        for period in payload.properties.periods {
            let start = DateTime::parse_from_rfc3339(&period.start_time).map_err(|source| {
                NwsError::BadTimestamp {
                    value: period.start_time.clone(),
                    source,
                }
            })?;
            let label = format!("Time: {}", start.format("%H:00"));
            forecast.insert(label, hourly_body(&period));
        }
        Ok(forecast)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NwsError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| NwsError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    NwsError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    NwsError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| NwsError::NetworkRequest(url.to_string(), e))?;
        serde_json::from_str(&body).map_err(|source| NwsError::JsonParse {
            url: url.to_string(),
            source,
        })
    }
}

fn hourly_body(period: &HourlyPeriod) -> String {
    let precipitation = period
        .probability_of_precipitation
        .as_ref()
        .and_then(|p| p.value)
        .unwrap_or(0);
    format!(
        "Temperature:  {} {}\n\
         Chance of Precipitation:  {}%\n\
         Wind Speed:  {}\n\
         Wind Direction:  {}\n\
         Conditions:  {}",
        period.temperature,
        period.temperature_unit,
        precipitation,
        period.wind_speed,
        period.wind_direction,
        period.short_forecast
    )
}
