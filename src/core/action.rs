//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User presses Tab? That's `Action::NextTab`.
//! The country request resolves? That's `Action::CountriesLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::navigation::{Screen, Tab};
use crate::core::state::{App, CountryListState};
use crate::countries::{Country, FetchError};

#[derive(Debug)]
pub enum Action {
    /// Mount-time hook for the Home view. Requests the fetch once.
    Start,
    /// Result of a fetch started for the given mount.
    CountriesLoaded {
        mount_id: u64,
        result: Result<Vec<Country>, FetchError>,
    },
    /// Tear down and re-mount the Home view.
    RemountHome,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    SelectNext,
    SelectPrev,
    /// Move the selection by a page of the given size.
    PageDown(usize),
    PageUp(usize),
    SelectFirst,
    SelectLast,
    OpenDetail,
    Back,
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchCountries { mount_id: u64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => match app.home.begin_fetch() {
            Some(mount_id) => {
                info!("Home mounted (mount_id={}), requesting countries", mount_id);
                Effect::FetchCountries { mount_id }
            }
            None => Effect::None,
        },
        Action::CountriesLoaded { mount_id, result } => {
            if !app.home.apply(mount_id, result) {
                warn!(
                    "Discarding country result for mount {} (current mount {})",
                    mount_id,
                    app.home.mount_id()
                );
                return Effect::None;
            }
            match app.home.state() {
                CountryListState::Success(countries) => {
                    app.selected = if countries.is_empty() { None } else { Some(0) };
                    app.fetched_at = Some(Local::now());
                    app.status_message = match countries.len() {
                        1 => String::from("1 country"),
                        n => format!("{n} countries"),
                    };
                }
                CountryListState::Failure(e) => {
                    app.status_message = String::from("Failed to load countries");
                    info!("Home view failed: {}", e);
                }
                CountryListState::Loading => {}
            }
            Effect::None
        }
        Action::RemountHome => {
            app.shell.pop_to_root();
            app.shell.select_tab(Tab::Home);
            app.remount_home();
            update(app, Action::Start)
        }
        Action::NextTab => {
            app.shell.next_tab();
            Effect::None
        }
        Action::PrevTab => {
            app.shell.prev_tab();
            Effect::None
        }
        Action::SelectTab(tab) => {
            app.shell.select_tab(tab);
            Effect::None
        }
        Action::SelectNext => move_selection(app, 1),
        Action::SelectPrev => move_selection(app, -1),
        Action::PageDown(page) => move_selection(app, page as isize),
        Action::PageUp(page) => move_selection(app, -(page as isize)),
        Action::SelectFirst => move_selection(app, isize::MIN),
        Action::SelectLast => move_selection(app, isize::MAX),
        Action::OpenDetail => {
            if on_home_list(app)
                && let Some(index) = app.selected
                && let Some(key) = app.home.key_at(index)
            {
                debug!("Opening detail for row {} ({})", index, key);
                app.shell.push_detail(key);
            }
            Effect::None
        }
        Action::Back => {
            app.shell.pop();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn on_home_list(app: &App) -> bool {
    app.shell.current_screen() == Screen::Tabs && app.shell.active_tab() == Tab::Home
}

/// Moves the Home selection by `delta` rows, clamped to the list.
fn move_selection(app: &mut App, delta: isize) -> Effect {
    let len = app.home.countries().len();
    if !on_home_list(app) || len == 0 {
        return Effect::None;
    }
    let current = app.selected.unwrap_or(0) as isize;
    let target = current.saturating_add(delta).clamp(0, len as isize - 1);
    app.selected = Some(target as usize);
    Effect::None
}
