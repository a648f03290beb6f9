//! Sequences the user's choices: state, then zone, then forecast kind, then
//! (for hourly) an observation station.
//!
//! Each step blocks on its prompter until the user confirms a choice from an
//! enumerated list, and each step's candidates derive from the previous
//! choice, so a finished run upholds the selection invariants by
//! construction. An empty candidate list is a reportable
//! [`SelectionError::InputUnavailable`], never an empty picker.

use crate::states::STATES;
use crate::types::forecast::ForecastKind;
use crate::types::station::Station;
use crate::types::zone::{Zone, ZoneCatalog};
use crate::workflow::error::SelectionError;
use crate::workflow::prompt::Prompter;

/// The selection flow controller. Holds only the prompter; choices are
/// returned to the caller, which assembles the final
/// [`Selection`](crate::Selection).
pub struct SelectionFlow<'a, P: Prompter> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter> SelectionFlow<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Picks a state from the static table, shown as "Name (XX)".
    ///
    /// The catalog is only consulted for non-emptiness here; whether the
    /// chosen state actually has zones is the next step's concern.
    pub fn choose_state(&mut self, catalog: &ZoneCatalog) -> Result<String, SelectionError> {
        if catalog.is_empty() {
            return Err(SelectionError::InputUnavailable {
                what: "weather zones",
                scope: "the zone catalog".to_string(),
            });
        }
        let items: Vec<String> = STATES
            .iter()
            .map(|(code, name)| format!("{name} ({code})"))
            .collect();
        match self.prompter.select("Please select a state", &items)? {
            Some(index) => Ok(STATES[index].0.to_string()),
            None => Err(SelectionError::Cancelled),
        }
    }

    /// Picks one of the state's zones by identifier.
    pub fn choose_zone(
        &mut self,
        catalog: &ZoneCatalog,
        state: &str,
    ) -> Result<Zone, SelectionError> {
        let zones = catalog.zones_for_state(state);
        if zones.is_empty() {
            return Err(SelectionError::InputUnavailable {
                what: "weather zones",
                scope: format!("state {state}"),
            });
        }
        let items: Vec<String> = zones.iter().map(|zone| zone.id.clone()).collect();
        match self.prompter.select("Please select a zone code", &items)? {
            Some(index) => Ok(zones[index].clone()),
            None => Err(SelectionError::Cancelled),
        }
    }

    /// Picks between the daily and hourly forecast.
    pub fn choose_kind(&mut self) -> Result<ForecastKind, SelectionError> {
        let kinds = [ForecastKind::Daily, ForecastKind::Hourly];
        let items: Vec<String> = kinds.iter().map(|k| k.picker_label().to_string()).collect();
        match self
            .prompter
            .select("Please select forecast type", &items)?
        {
            Some(index) => Ok(kinds[index]),
            None => Err(SelectionError::Cancelled),
        }
    }

    /// Picks an observation station of the chosen zone, by 4-character code.
    pub fn choose_station(
        &mut self,
        zone_id: &str,
        stations: &[Station],
    ) -> Result<Station, SelectionError> {
        if stations.is_empty() {
            return Err(SelectionError::InputUnavailable {
                what: "observation stations",
                scope: format!("zone {zone_id}"),
            });
        }
        let items: Vec<String> = stations.iter().map(|s| s.label().to_string()).collect();
        match self
            .prompter
            .select("Please select an observation station", &items)?
        {
            Some(index) => Ok(stations[index].clone()),
            None => Err(SelectionError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::prompt::testing::{Answer, ScriptedPrompter};

    fn catalog() -> ZoneCatalog {
        ZoneCatalog::new(vec![
            Zone {
                state: "CA".to_string(),
                id: "CAZ006".to_string(),
                url: "https://api.weather.gov/zones/land/CAZ006".to_string(),
            },
            Zone {
                state: "CA".to_string(),
                id: "CAZ007".to_string(),
                url: "https://api.weather.gov/zones/land/CAZ007".to_string(),
            },
        ])
    }

    #[test]
    fn full_sequence_yields_dependent_choices() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Pick("California"),
            Answer::Pick("CAZ007"),
            Answer::Pick("Hourly"),
            Answer::Pick("KSFO"),
        ]);
        let catalog = catalog();
        let mut flow = SelectionFlow::new(&mut prompter);

        let state = flow.choose_state(&catalog).unwrap();
        assert_eq!(state, "CA");

        let zone = flow.choose_zone(&catalog, &state).unwrap();
        assert_eq!(zone.id, "CAZ007");

        let kind = flow.choose_kind().unwrap();
        assert_eq!(kind, ForecastKind::Hourly);

        let stations = [
            Station::new("https://api.weather.gov/stations/KSFO"),
            Station::new("https://api.weather.gov/stations/KOAK"),
        ];
        let station = flow.choose_station(&zone.id, &stations).unwrap();
        assert_eq!(station.label(), "KSFO");
    }

    #[test]
    fn state_without_zones_is_input_unavailable() {
        let mut prompter = ScriptedPrompter::new([]);
        let mut flow = SelectionFlow::new(&mut prompter);

        let err = flow.choose_zone(&catalog(), "NV").unwrap_err();
        assert!(matches!(
            err,
            SelectionError::InputUnavailable { what: "weather zones", ref scope } if scope == "state NV"
        ));
        // The prompter is never consulted for an empty candidate list.
        assert!(prompter.prompts.is_empty());
    }

    #[test]
    fn empty_catalog_is_input_unavailable_at_state_step() {
        let mut prompter = ScriptedPrompter::new([]);
        let mut flow = SelectionFlow::new(&mut prompter);

        let err = flow.choose_state(&ZoneCatalog::default()).unwrap_err();
        assert!(matches!(err, SelectionError::InputUnavailable { .. }));
    }

    #[test]
    fn empty_station_list_is_input_unavailable() {
        let mut prompter = ScriptedPrompter::new([]);
        let mut flow = SelectionFlow::new(&mut prompter);

        let err = flow.choose_station("CAZ006", &[]).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::InputUnavailable { what: "observation stations", .. }
        ));
    }

    #[test]
    fn cancelling_a_picker_is_cancelled() {
        let mut prompter = ScriptedPrompter::new([Answer::Cancel]);
        let mut flow = SelectionFlow::new(&mut prompter);

        let err = flow.choose_state(&catalog()).unwrap_err();
        assert!(matches!(err, SelectionError::Cancelled));
    }
}
