//! # Placeholder Component
//!
//! Static content for the tabs that have no feature behind them yet
//! (Profile, Tourist, Hotel, Settings): the screen's name, centered and bold.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::navigation::Tab;
use crate::tui::component::Component;

pub struct Placeholder {
    pub tab: Tab,
}

impl Placeholder {
    pub fn new(tab: Tab) -> Self {
        Self { tab }
    }
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(Span::styled(
            format!("{} Screen", self.tab.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
    }
}
