//! # TitleBar Component
//!
//! Top status bar: app name, status message, and when the list last loaded.
//!
//! Purely presentational. All props come from core `App` state:
//!
//! 1. **Loaded**: `"Atlas | 250 countries | updated 14:03:12"`
//! 2. **Status only**: `"Atlas | Loading countries..."`
//! 3. **Default**: `"Atlas"`

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub status_message: String,
    pub fetched_at: Option<DateTime<Local>>,
}

impl TitleBar {
    pub fn new(status_message: String, fetched_at: Option<DateTime<Local>>) -> Self {
        Self {
            status_message,
            fetched_at,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("Atlas");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(at) = self.fetched_at {
            text.push_str(&format!(" | updated {}", at.format("%H:%M:%S")));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
