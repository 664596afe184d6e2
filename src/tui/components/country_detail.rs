//! # CountryDetail Component
//!
//! Stack screen pushed from the Home list. Shows everything decoded for one
//! country, including the full capitals list and the flag's alt text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::countries::{Country, NO_CAPITAL};
use crate::tui::component::Component;

pub struct CountryDetail<'a> {
    pub country: Option<&'a Country>,
}

impl<'a> CountryDetail<'a> {
    pub fn new(country: Option<&'a Country>) -> Self {
        Self { country }
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(country) = self.country else {
            let paragraph = Paragraph::new("Country not found")
                .block(Block::bordered().title("Details"));
            frame.render_widget(paragraph, area);
            return;
        };

        let capitals = if country.capitals.is_empty() {
            NO_CAPITAL.to_string()
        } else {
            country.capitals.join(", ")
        };

        let lines = vec![
            field("Name", country.common_name.clone()),
            field("Official", country.official_name.clone()),
            field("Capital", capitals),
            Line::default(),
            field("Flag", country.flag_image_url.clone()),
            field("Flag alt", country.flag_alt_text()),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(Span::styled(
                        country.common_name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}
