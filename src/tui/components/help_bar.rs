use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::navigation::{Screen, Tab};
use crate::tui::component::Component;

/// Bottom line of key hints for the current screen.
pub struct HelpBar {
    pub screen: Screen,
    pub tab: Tab,
}

impl HelpBar {
    pub fn new(screen: Screen, tab: Tab) -> Self {
        Self { screen, tab }
    }

    fn hints(&self) -> &'static str {
        match (&self.screen, self.tab) {
            (Screen::CountryDetail(_), _) => "Esc back · q back · Ctrl+C quit",
            (Screen::Tabs, Tab::Home) => {
                "↑↓ select · Enter details · Tab/1-5 switch · Ctrl+R reload · q quit"
            }
            (Screen::Tabs, _) => "Tab/1-5 switch · Ctrl+R reload home · q quit",
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
