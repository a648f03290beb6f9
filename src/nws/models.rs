//! Typed response models for the National Weather Service payloads, limited
//! to the fields this crate consumes.
//!
//! Every payload nests its interesting data under GeoJSON `properties` (or
//! `geometry` for station coordinates), so each endpoint gets a small
//! two-level struct pair here.

use serde::Deserialize;

/// `GET /zones/land`
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneCollection {
    pub features: Vec<ZoneFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneFeature {
    /// The zone's API reference URL; its last path segment is the zone id.
    pub id: String,
    pub properties: ZoneFeatureProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneFeatureProperties {
    #[serde(default)]
    pub state: Option<String>,
}

/// `GET {zone url}/forecast`
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneForecastPayload {
    pub properties: ZoneForecastProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneForecastProperties {
    pub periods: Vec<ZonePeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ZonePeriod {
    pub name: String,
    pub detailed_forecast: String,
}

/// `GET {zone url}`
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneDetailPayload {
    pub properties: ZoneDetailProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ZoneDetailProperties {
    #[serde(default)]
    pub observation_stations: Vec<String>,
}

/// `GET {station url}`
#[derive(Debug, Deserialize)]
pub(crate) struct StationPayload {
    pub geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointGeometry {
    /// GeoJSON order: `[longitude, latitude]`.
    pub coordinates: Vec<f64>,
}

/// `GET /points/{lat},{lon}`
#[derive(Debug, Deserialize)]
pub(crate) struct GridPointPayload {
    pub properties: GridPointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GridPointProperties {
    pub forecast_hourly: String,
}

/// `GET {forecastHourly url}`
#[derive(Debug, Deserialize)]
pub(crate) struct HourlyForecastPayload {
    pub properties: HourlyForecastProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HourlyForecastProperties {
    pub periods: Vec<HourlyPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HourlyPeriod {
    pub start_time: String,
    pub temperature: i64,
    pub temperature_unit: String,
    #[serde(default)]
    pub probability_of_precipitation: Option<UnitValue>,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
}

/// The API wraps some quantities as `{"unitCode": ..., "value": n}` where
/// `value` may be null.
#[derive(Debug, Deserialize)]
pub(crate) struct UnitValue {
    #[serde(default)]
    pub value: Option<i64>,
}
