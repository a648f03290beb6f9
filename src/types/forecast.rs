//! Defines the forecast value types shared by the API client, the selection
//! workflow and the presenter: the kind of forecast a user can request and
//! the ordered, labelled text blocks a fetch produces.

use std::fmt;

/// The granularity of forecast the user asked for.
///
/// Selected at the forecast-kind step of the workflow and carried in the
/// [`Selection`](crate::Selection) until the fetch chain completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    /// One entry per named period ("Tonight", "Wednesday", ...), built from
    /// the zone forecast endpoint.
    Daily,
    /// One entry per hour, built from the grid point's hourly forecast
    /// endpoint after resolving an observation station to a coordinate.
    Hourly,
}

impl ForecastKind {
    /// The item text shown for this kind in the selection picker.
    pub fn picker_label(&self) -> &'static str {
        match self {
            ForecastKind::Daily => "Daily Forecast",
            ForecastKind::Hourly => "Hourly Forecast",
        }
    }
}

/// Formats the kind in lowercase.
///
/// # Examples
///
/// ```
/// use zonecast::ForecastKind;
///
/// assert_eq!(ForecastKind::Hourly.to_string(), "hourly");
/// assert_eq!(format!("{}", ForecastKind::Daily), "daily");
/// ```
impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastKind::Daily => write!(f, "daily"),
            ForecastKind::Hourly => write!(f, "hourly"),
        }
    }
}

/// A single labelled block of forecast text.
///
/// The label is a period name for daily forecasts or an hour-of-day string
/// for hourly forecasts; the body is free text, possibly spanning several
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastEntry {
    pub label: String,
    pub body: String,
}

/// An ordered sequence of [`ForecastEntry`] values with unique labels.
///
/// Insertion order is display order. Inserting a label that is already
/// present replaces that entry's body in place, keeping its position, so
/// labels stay unique within one response.
///
/// # Examples
///
/// ```
/// use zonecast::Forecast;
///
/// let mut forecast = Forecast::new();
/// forecast.insert("Tonight", "Clear.");
/// forecast.insert("Wednesday", "Sunny.");
/// forecast.insert("Tonight", "Patchy fog.");
///
/// let labels: Vec<_> = forecast.entries().iter().map(|e| e.label.as_str()).collect();
/// assert_eq!(labels, ["Tonight", "Wednesday"]);
/// assert_eq!(forecast.entries()[0].body, "Patchy fog.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forecast {
    entries: Vec<ForecastEntry>,
}

impl Forecast {
    /// Creates an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, or replaces the body of an existing entry with the
    /// same label.
    pub fn insert(&mut self, label: impl Into<String>, body: impl Into<String>) {
        let label = label.into();
        let body = body.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => existing.body = body,
            None => self.entries.push(ForecastEntry { label, body }),
        }
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[ForecastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut forecast = Forecast::new();
        forecast.insert("Tonight", "a");
        forecast.insert("Wednesday", "b");
        forecast.insert("Wednesday Night", "c");

        let labels: Vec<_> = forecast.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Tonight", "Wednesday", "Wednesday Night"]);
    }

    #[test]
    fn duplicate_label_replaces_body_in_place() {
        let mut forecast = Forecast::new();
        forecast.insert("Time: 14:00", "first");
        forecast.insert("Time: 15:00", "second");
        forecast.insert("Time: 14:00", "replaced");

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast.entries()[0].label, "Time: 14:00");
        assert_eq!(forecast.entries()[0].body, "replaced");
        assert_eq!(forecast.entries()[1].body, "second");
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(ForecastKind::Daily.to_string(), "daily");
        assert_eq!(ForecastKind::Hourly.to_string(), "hourly");
    }
}
