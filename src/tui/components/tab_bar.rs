//! # TabBar Component
//!
//! One line listing every tab with the active one highlighted. Dimmed while a
//! detail screen covers the tab container.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::navigation::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
    pub covered: bool,
}

impl TabBar {
    pub fn new(active: Tab, covered: bool) -> Self {
        Self { active, covered }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));

        let base = if self.covered {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(base)
            .highlight_style(base.fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .divider("│");

        frame.render_widget(tabs, area);
    }
}
