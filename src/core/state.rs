//! # Application State
//!
//! Core business state for Atlas. Domain logic only, no TUI-specific types.
//! Presentation state (list scroll offsets, spinner frames) lives in `tui`.
//!
//! ```text
//! App
//! ├── shell: AppShell               // tabs + navigation stack
//! ├── home: CountryListView         // Home tab content
//! ├── next_mount_id: u64            // id handed to the next Home mount
//! ├── selected: Option<usize>       // highlighted row on Home
//! ├── status_message: String        // title bar text
//! └── fetched_at: Option<DateTime>  // when the list last loaded
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::core::navigation::{AppShell, Tab};
use crate::countries::{Country, FetchError};

/// What the country list is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryListState {
    Loading,
    Success(Vec<Country>),
    Failure(FetchError),
}

/// The Home screen's view model.
///
/// Starts in `Loading`. The fetch is requested at most once per mount and its
/// result is applied at most once. `Success` and `Failure` are terminal until
/// the view is replaced by a fresh mount.
#[derive(Debug)]
pub struct CountryListView {
    state: CountryListState,
    mount_id: u64,
    fetch_requested: bool,
}

impl CountryListView {
    pub fn mount(mount_id: u64) -> Self {
        Self {
            state: CountryListState::Loading,
            mount_id,
            fetch_requested: false,
        }
    }

    pub fn state(&self) -> &CountryListState {
        &self.state
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    /// Returns the mount id to fetch for, the first time only.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.fetch_requested {
            return None;
        }
        self.fetch_requested = true;
        Some(self.mount_id)
    }

    /// Applies a fetch result. Returns false (and changes nothing) if the
    /// result belongs to another mount or the view already left `Loading`.
    pub fn apply(&mut self, mount_id: u64, result: Result<Vec<Country>, FetchError>) -> bool {
        if mount_id != self.mount_id || self.state != CountryListState::Loading {
            return false;
        }
        self.state = match result {
            Ok(countries) => CountryListState::Success(countries),
            Err(e) => CountryListState::Failure(e),
        };
        true
    }

    pub fn countries(&self) -> &[Country] {
        match &self.state {
            CountryListState::Success(countries) => countries,
            _ => &[],
        }
    }

    pub fn rows(&self) -> Vec<CountryRow> {
        let countries = self.countries();
        row_keys(countries)
            .into_iter()
            .zip(countries)
            .map(|(key, country)| CountryRow::new(key, country))
            .collect()
    }

    /// Looks up a country by its row key.
    pub fn country_by_key(&self, key: &str) -> Option<&Country> {
        let countries = self.countries();
        row_keys(countries)
            .iter()
            .position(|k| k == key)
            .map(|index| &countries[index])
    }

    /// Row key of the country at `index`, if the list has that many rows.
    pub fn key_at(&self, index: usize) -> Option<String> {
        row_keys(self.countries()).into_iter().nth(index)
    }
}

/// One rendered line of the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub key: String,
    pub flag: String,
    pub name: String,
    pub capital: String,
}

impl CountryRow {
    fn new(key: String, country: &Country) -> Self {
        Self {
            key,
            flag: country.flag_image_url.clone(),
            name: country.common_name.clone(),
            capital: country.capital_text().to_string(),
        }
    }
}

/// Row keys for a list of countries.
///
/// The official name is the key. When it is already taken within one
/// response, the row is keyed `"<official name>#<row index>"`, extended with
/// further `#<row index>` suffixes until unused. Keys are unique and stable
/// for a given response.
pub fn row_keys(countries: &[Country]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    countries
        .iter()
        .enumerate()
        .map(|(index, country)| {
            let mut key = country.official_name.clone();
            while seen.contains(&key) {
                key = format!("{key}#{index}");
            }
            seen.insert(key.clone());
            key
        })
        .collect()
}

pub struct App {
    pub shell: AppShell,
    pub home: CountryListView,
    pub next_mount_id: u64,
    pub selected: Option<usize>,
    pub status_message: String,
    pub fetched_at: Option<DateTime<Local>>,
}

impl App {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            shell: AppShell::new(initial_tab),
            home: CountryListView::mount(1),
            next_mount_id: 2,
            selected: None,
            status_message: String::from("Loading countries..."),
            fetched_at: None,
        }
    }

    /// Replaces the Home view with a fresh mount. Anything still in flight
    /// for the old mount will be discarded when it arrives.
    pub fn remount_home(&mut self) {
        self.home = CountryListView::mount(self.next_mount_id);
        self.next_mount_id += 1;
        self.selected = None;
        self.fetched_at = None;
        self.status_message = String::from("Loading countries...");
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.home.state(), CountryListState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{antarctica, france};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Tab::Home);
        assert!(app.is_loading());
        assert_eq!(app.home.mount_id(), 1);
        assert_eq!(app.status_message, "Loading countries...");
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_fetch_requested_once_per_mount() {
        let mut view = CountryListView::mount(7);
        assert_eq!(view.begin_fetch(), Some(7));
        assert_eq!(view.begin_fetch(), None);
    }

    #[test]
    fn test_success_is_terminal() {
        let mut view = CountryListView::mount(1);
        assert!(view.apply(1, Ok(vec![france()])));
        assert!(!view.apply(1, Err(FetchError::HttpStatus(500))));
        assert_eq!(view.countries().len(), 1);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut view = CountryListView::mount(1);
        assert!(view.apply(1, Err(FetchError::HttpStatus(500))));
        assert!(!view.apply(1, Ok(vec![france()])));
        assert_eq!(
            view.state(),
            &CountryListState::Failure(FetchError::HttpStatus(500))
        );
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_stale_mount_result_is_discarded() {
        let mut view = CountryListView::mount(2);
        assert!(!view.apply(1, Ok(vec![france()])));
        assert_eq!(view.state(), &CountryListState::Loading);
    }

    #[test]
    fn test_rows_follow_response_order() {
        let mut view = CountryListView::mount(1);
        view.apply(1, Ok(vec![france(), antarctica()]));
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "France");
        assert_eq!(rows[0].capital, "Paris");
        assert_eq!(rows[0].flag, "a.png");
        assert_eq!(rows[1].name, "Antarctica");
        assert_eq!(rows[1].capital, "No capital");
    }

    #[test]
    fn test_duplicate_official_names_get_index_keys() {
        let a = Country::new("Congo", "Republic of the Congo", vec![], "cg.png", None);
        let b = Country::new("Congo B", "Republic of the Congo", vec![], "cg2.png", None);
        let keys = row_keys(&[a, france(), b]);
        assert_eq!(
            keys,
            vec![
                "Republic of the Congo".to_string(),
                "French Republic".to_string(),
                "Republic of the Congo#2".to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_key_never_collides_with_real_name() {
        let countries = [
            Country::new("A", "Republic", vec![], "a.png", None),
            Country::new("B", "Republic", vec![], "b.png", None),
            Country::new("C", "Republic#1", vec![], "c.png", None),
        ];
        let keys = row_keys(&countries);
        assert_eq!(keys, vec!["Republic", "Republic#1", "Republic#1#2"]);

        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_country_by_key_resolves_duplicates() {
        let a = Country::new("Congo", "Republic of the Congo", vec![], "cg.png", None);
        let b = Country::new("Congo B", "Republic of the Congo", vec![], "cg2.png", None);
        let mut view = CountryListView::mount(1);
        view.apply(1, Ok(vec![a, b]));

        let key = view.key_at(1).unwrap();
        assert_eq!(key, "Republic of the Congo#1");
        assert_eq!(view.country_by_key(&key).unwrap().common_name, "Congo B");
        assert_eq!(
            view.country_by_key("Republic of the Congo").unwrap().common_name,
            "Congo"
        );
        assert!(view.country_by_key("Atlantis").is_none());
        assert!(view.key_at(2).is_none());
    }

    #[test]
    fn test_remount_resets_to_loading() {
        let mut app = App::new(Tab::Home);
        app.home.apply(1, Ok(vec![france()]));
        app.selected = Some(0);
        app.remount_home();
        assert!(app.is_loading());
        assert_eq!(app.home.mount_id(), 2);
        assert_eq!(app.next_mount_id, 3);
        assert!(app.selected.is_none());
    }
}
