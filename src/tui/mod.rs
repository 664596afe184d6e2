//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   background result.
//!
//! ## Background Fetch
//!
//! The country request runs on a tokio task and reports back through an
//! `std::sync::mpsc` channel as `Action::CountriesLoaded`. Results carry the
//! mount id they were started for, so a result for a torn-down Home view is
//! discarded by the reducer. After the loop exits the receiver is dropped and
//! late results are only logged.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::countries::{CountrySource, RestCountriesClient};
use crate::tui::components::CountryListUiState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub country_list: CountryListUiState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the country source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CountrySource> {
    Arc::new(RestCountriesClient::new(
        Some(config.api_base_url.clone()),
        config.timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    info!(
        "Using country source '{}' at {}",
        source.name(),
        config.api_base_url
    );
    run_with_source(source, config.start_tab)
}

pub fn run_with_source(source: Arc<dyn CountrySource>, start_tab: Tab) -> std::io::Result<()> {
    let mut app = App::new(start_tab);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e));

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Mount the Home view
    let effect = update(&mut app, Action::Start);
    apply_effect(effect, &source, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = event_to_action(&event, &app, tui.country_list.page_size()) else {
                continue;
            };
            debug!("Event {:?} -> {:?}", event, action);
            if apply_effect(update(&mut app, action), &source, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply_effect(update(&mut app, action), &source, &tx);
        }
    }

    info!("Shutting down");
    drop(rx);
    ratatui::restore();
    Ok(())
}

/// Performs an effect. Returns true when the app should quit.
fn apply_effect(effect: Effect, source: &Arc<dyn CountrySource>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchCountries { mount_id } => {
            spawn_fetch(source.clone(), mount_id, tx.clone());
            false
        }
    }
}

/// Maps a terminal event to a core action for the current screen.
fn event_to_action(event: &TuiEvent, app: &App, page_size: usize) -> Option<Action> {
    let at_root = app.shell.at_root();
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Quit if at_root => Some(Action::Quit),
        TuiEvent::Quit | TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
        TuiEvent::Remount => Some(Action::RemountHome),
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PrevTab => Some(Action::PrevTab),
        TuiEvent::SelectTab(index) => Tab::from_index(*index).map(Action::SelectTab),
        TuiEvent::CursorUp => Some(Action::SelectPrev),
        TuiEvent::CursorDown => Some(Action::SelectNext),
        TuiEvent::PageUp => Some(Action::PageUp(page_size)),
        TuiEvent::PageDown => Some(Action::PageDown(page_size)),
        TuiEvent::First => Some(Action::SelectFirst),
        TuiEvent::Last => Some(Action::SelectLast),
        TuiEvent::Submit => Some(Action::OpenDetail),
        TuiEvent::Resize => None,
    }
}

fn spawn_fetch(source: Arc<dyn CountrySource>, mount_id: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning country fetch (mount_id={})", mount_id);
    tokio::spawn(fetch_and_deliver(source, mount_id, tx));
}

/// Runs one fetch and posts the result. Returns false if nobody is listening.
async fn fetch_and_deliver(
    source: Arc<dyn CountrySource>,
    mount_id: u64,
    tx: mpsc::Sender<Action>,
) -> bool {
    let request_start = std::time::Instant::now();
    let result = source.fetch_all_countries().await;
    let duration_ms = request_start.elapsed().as_millis();

    match &result {
        Ok(countries) => info!(
            "Fetch for mount {} returned {} countries in {}ms",
            mount_id,
            countries.len(),
            duration_ms
        ),
        Err(e) => warn!("Fetch for mount {} failed after {}ms: {}", mount_id, duration_ms, e),
    }

    if tx
        .send(Action::CountriesLoaded { mount_id, result })
        .is_err()
    {
        warn!(
            "Dropping country result for mount {}: receiver dropped (view torn down)",
            mount_id
        );
        return false;
    }
    true
}
