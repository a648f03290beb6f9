//! Defines the data structures for National Weather Service land zones and
//! the read-only catalog of them loaded once at startup.

use serde::{Deserialize, Serialize};

/// A single forecast zone: an administrative area identified by a code such
/// as `CAZ006`, scoped to one state.
///
/// The `url` is the zone's API resource; the daily forecast and the
/// observation-station list both hang off it. The `id` is the last path
/// segment of that URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Two-letter state code (e.g. "CA").
    pub state: String,
    /// Zone identifier (e.g. "CAZ006").
    pub id: String,
    /// The zone's API reference URL.
    pub url: String,
}

/// All land zones known to the API, loaded once by
/// [`NwsClient::zone_catalog`](crate::NwsClient::zone_catalog) and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// The state codes present in the catalog, sorted and deduplicated.
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.zones.iter().map(|z| z.state.as_str()).collect();
        states.sort_unstable();
        states.dedup();
        states
    }

    /// The zones of one state, in catalog order.
    pub fn zones_for_state(&self, state: &str) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.state == state).collect()
    }

    /// Looks a zone up by its identifier.
    pub fn get(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(state: &str, id: &str) -> Zone {
        Zone {
            state: state.to_string(),
            id: id.to_string(),
            url: format!("https://api.weather.gov/zones/land/{id}"),
        }
    }

    fn catalog() -> ZoneCatalog {
        ZoneCatalog::new(vec![
            zone("OR", "ORZ001"),
            zone("CA", "CAZ006"),
            zone("CA", "CAZ007"),
        ])
    }

    #[test]
    fn states_are_sorted_and_unique() {
        assert_eq!(catalog().states(), ["CA", "OR"]);
    }

    #[test]
    fn zones_for_state_keeps_catalog_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.zones_for_state("CA").iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, ["CAZ006", "CAZ007"]);
        assert!(catalog.zones_for_state("NV").is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get("ORZ001").map(|z| z.state.as_str()), Some("OR"));
        assert!(catalog.get("NVZ001").is_none());
    }
}
