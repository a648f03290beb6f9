//! The user's accumulated choices for one forecast request.

use crate::states::state_name;
use crate::types::forecast::ForecastKind;
use crate::types::station::Station;

/// The three (or, for hourly, four) choices gathered by the selection
/// workflow.
///
/// Built incrementally as the flow advances and immutable once the fetch
/// chain runs. The zone always belongs to the chosen state and the station
/// to the chosen zone, because each picker only offers candidates derived
/// from the previous choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Two-letter state code.
    pub state: String,
    /// Zone identifier within that state.
    pub zone: String,
    /// Daily or hourly.
    pub kind: ForecastKind,
    /// The observation station, present only for hourly requests.
    pub station: Option<Station>,
}

impl Selection {
    /// The heading the presenter shows above the rendered forecast.
    pub fn title(&self) -> String {
        match (&self.kind, &self.station) {
            (ForecastKind::Hourly, Some(station)) => format!(
                "Hourly forecast for station {} in {}",
                station.label(),
                state_name(&self.state)
            ),
            _ => format!("Weather Forecast: {}, {}", state_name(&self.state), self.zone),
        }
    }
}
