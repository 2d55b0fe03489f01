use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::filter::LocationQuery;
use crate::data::model::{GeoPoint, PubDataset};
use crate::data::nearest::DEFAULT_NEAREST;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// The pages reachable from the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    PubLocations,
    NearestPub,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 3] = [Page::Home, Page::PubLocations, Page::NearestPub];

    /// Title shown in the sidebar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::PubLocations => "Pub Locations",
            Page::NearestPub => "Find the Nearest Pub",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-view inputs
// ---------------------------------------------------------------------------

/// Which field the Pub Locations page searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Postcode,
    LocalAuthority,
}

/// Inputs of the Pub Locations page. Both values are kept so toggling the
/// mode does not lose what the user typed or picked.
#[derive(Debug, Clone, Default)]
pub struct LocationsInput {
    pub mode: SearchMode,
    /// Free-text postcode.
    pub postcode: String,
    /// Closed choice over the dataset's distinct authorities.
    pub local_authority: Option<String>,
}

impl LocationsInput {
    /// The query described by the current mode and inputs. No selection yet
    /// maps to an empty query value, which matches nothing.
    pub fn query(&self) -> LocationQuery {
        match self.mode {
            SearchMode::Postcode => LocationQuery::ByPostcode(self.postcode.clone()),
            SearchMode::LocalAuthority => {
                LocationQuery::ByLocalAuthority(self.local_authority.clone().unwrap_or_default())
            }
        }
    }
}

/// Inputs of the Find the Nearest Pub page.
#[derive(Debug, Clone)]
pub struct NearestInput {
    /// Latitude text field, parsed on every frame.
    pub latitude: String,
    /// Longitude text field, parsed on every frame.
    pub longitude: String,
    /// How many pubs to show, bounded by the slider.
    pub count: usize,
    /// Target the map window was last centred on; `None` forces a recentre.
    pub centered_on: Option<GeoPoint>,
}

impl Default for NearestInput {
    fn default() -> Self {
        // Central London.
        Self {
            latitude: String::from("51.5074"),
            longitude: String::from("-0.1278"),
            count: DEFAULT_NEAREST,
            centered_on: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is loaded once
/// and only ever replaced wholesale by File → Open…; every render borrows
/// it read-only.
pub struct AppState {
    pub dataset: PubDataset,

    /// File the dataset was loaded from (shown in the top bar).
    pub data_path: PathBuf,

    /// Marker colour per local authority.
    pub color_map: ColorMap,

    /// Currently selected page.
    pub page: Page,

    /// Pub Locations inputs.
    pub locations: LocationsInput,

    /// Find the Nearest Pub inputs.
    pub nearest: NearestInput,

    /// Error message shown in the top bar after a failed load.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: PubDataset, data_path: PathBuf) -> Self {
        let color_map = ColorMap::new(&dataset.local_authorities);
        Self {
            dataset,
            data_path,
            color_map,
            page: Page::default(),
            locations: LocationsInput::default(),
            nearest: NearestInput::default(),
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and drop selections it invalidates.
    pub fn set_dataset(&mut self, dataset: PubDataset, path: PathBuf) {
        self.color_map = ColorMap::new(&dataset.local_authorities);

        // A selected authority from the old dataset may no longer exist.
        if let Some(authority) = &self.locations.local_authority {
            if !dataset.local_authorities.contains(authority) {
                self.locations.local_authority = None;
            }
        }

        self.dataset = dataset;
        self.data_path = path;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::PubRecord;

    fn dataset(authorities: &[&str]) -> PubDataset {
        let records = authorities
            .iter()
            .enumerate()
            .map(|(i, authority)| PubRecord {
                name: format!("Pub {i}"),
                postcode: format!("AB{i} 2CD"),
                local_authority: authority.to_string(),
                latitude: 51.0,
                longitude: -1.0,
            })
            .collect();
        PubDataset::from_records(records)
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn query_follows_search_mode() {
        let mut input = LocationsInput {
            postcode: "LL13 7LU".to_string(),
            ..Default::default()
        };
        assert_eq!(input.query(), LocationQuery::ByPostcode("LL13 7LU".into()));

        input.mode = SearchMode::LocalAuthority;
        input.local_authority = Some("Wrexham".to_string());
        assert_eq!(
            input.query(),
            LocationQuery::ByLocalAuthority("Wrexham".into())
        );
    }

    #[test]
    fn unselected_authority_queries_the_empty_string() {
        let input = LocationsInput {
            mode: SearchMode::LocalAuthority,
            ..Default::default()
        };
        assert_eq!(input.query(), LocationQuery::ByLocalAuthority(String::new()));
    }

    #[test]
    fn set_dataset_drops_missing_authority_selection() {
        let mut state = AppState::new(dataset(&["Camden", "Wrexham"]), "pubs.csv".into());
        state.locations.local_authority = Some("Wrexham".to_string());

        state.set_dataset(dataset(&["Camden"]), "other.csv".into());

        assert_eq!(state.locations.local_authority, None);
        assert_eq!(state.data_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn set_dataset_keeps_a_still_valid_selection() {
        let mut state = AppState::new(dataset(&["Camden", "Wrexham"]), "pubs.csv".into());
        state.locations.local_authority = Some("Camden".to_string());

        state.set_dataset(dataset(&["Camden"]), "other.csv".into());

        assert_eq!(state.locations.local_authority, Some("Camden".to_string()));
    }

    #[test]
    fn nearest_defaults_to_london() {
        let input = NearestInput::default();

        assert_eq!(input.latitude, "51.5074");
        assert_eq!(input.longitude, "-0.1278");
        assert_eq!(input.count, 5);
    }
}
