//! # CountryList Component
//!
//! The Home screen. Renders one of three things depending on the view state:
//!
//! - **Loading**: an animated spinner line, no list
//! - **Failure**: the error message in a bordered panel, no list, no retry
//! - **Success**: one row per country in response order, or a dim
//!   "No countries" line for an empty response
//!
//! ## Rows
//!
//! Each row shows the common name, the capital text (first capital or
//! "No capital") and the flag image URL. Names and capitals are padded to a
//! shared column width measured with `unicode-width` so accented and CJK
//! names line up.
//!
//! `CountryList` is a transient component (created each frame) that wraps
//! `&'a mut CountryListUiState` (persistent list offset and viewport height)
//! and borrows the core view as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{CountryListState, CountryListView, CountryRow};
use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Widest a name or capital column may grow before text is allowed to overflow.
const MAX_COLUMN_WIDTH: usize = 32;

/// List presentation state. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct CountryListUiState {
    pub list_state: ListState,
    /// Rows visible in the last frame, used for PageUp/PageDown.
    pub viewport_height: u16,
}

impl CountryListUiState {
    pub fn page_size(&self) -> usize {
        (self.viewport_height as usize).saturating_sub(1).max(1)
    }
}

pub struct CountryList<'a> {
    pub view: &'a CountryListView,
    pub selected: Option<usize>,
    pub spinner_frame: usize,
    pub state: &'a mut CountryListUiState,
}

impl<'a> CountryList<'a> {
    pub fn new(
        view: &'a CountryListView,
        selected: Option<usize>,
        spinner_frame: usize,
        state: &'a mut CountryListUiState,
    ) -> Self {
        Self {
            view,
            selected,
            spinner_frame,
            state,
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::raw(" Loading countries..."),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
    }

    fn render_failure(&self, frame: &mut Frame, area: Rect, message: String) {
        let paragraph = Paragraph::new(message)
            .block(
                Block::bordered()
                    .title("Error")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_rows(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.view.rows();
        if rows.is_empty() {
            let [line_area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            let line = Line::styled("No countries", Style::default().fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
            return;
        }
        let name_width = column_width(rows.iter().map(|r| r.name.as_str()));
        let capital_width = column_width(rows.iter().map(|r| r.capital.as_str()));

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| ListItem::new(row_line(row, name_width, capital_width)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▸ ");

        self.state.viewport_height = area.height;
        self.state.list_state.select(self.selected);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.view.state() {
            CountryListState::Loading => self.render_loading(frame, area),
            CountryListState::Failure(e) => self.render_failure(frame, area, e.to_string()),
            CountryListState::Success(_) => self.render_rows(frame, area),
        }
    }
}

fn column_width<'s>(values: impl Iterator<Item = &'s str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0).min(MAX_COLUMN_WIDTH)
}

/// Pads `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn row_line(row: &CountryRow, name_width: usize, capital_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(pad(&row.name, name_width), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(pad(&row.capital, capital_width), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(row.flag.clone(), Style::default().fg(Color::DarkGray)),
    ])
}
