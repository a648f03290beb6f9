//! Defines observation stations and the coordinate pair used to resolve one
//! to a forecast grid point.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use zonecast::LatLon;
///
/// let sfo = LatLon(37.6188, -122.3754);
/// assert_eq!(sfo.0, 37.6188); // Latitude
/// assert_eq!(sfo.1, -122.3754); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// An observation station reference from a zone's station list.
///
/// Stations are only an intermediate lookup key: the station resource yields
/// the coordinate that the points endpoint converts into a grid forecast
/// reference. The picker shows [`Station::label`], the 4-character suffix of
/// the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// The station's API reference URL (e.g. `.../stations/KSFO`).
    pub url: String,
}

impl Station {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The 4-character station code shown in the station picker.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonecast::Station;
    ///
    /// let station = Station::new("https://api.weather.gov/stations/KSFO");
    /// assert_eq!(station.label(), "KSFO");
    /// ```
    pub fn label(&self) -> &str {
        let start = self.url.len().saturating_sub(4);
        &self.url[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_last_four_characters() {
        let station = Station::new("https://api.weather.gov/stations/KOAK");
        assert_eq!(station.label(), "KOAK");
    }

    #[test]
    fn label_of_short_identifier_is_whole_identifier() {
        let station = Station::new("SFO");
        assert_eq!(station.label(), "SFO");
    }
}
