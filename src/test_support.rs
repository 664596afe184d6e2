//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use ratatui::buffer::Buffer;

use crate::core::action::{Action, update};
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::countries::{Country, CountrySource, FetchError};

/// A source that answers every fetch with a canned result.
pub struct StaticSource(pub Result<Vec<Country>, FetchError>);

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError> {
        self.0.clone()
    }
}

pub fn france() -> Country {
    Country::new(
        "France",
        "French Republic",
        vec!["Paris".to_string()],
        "a.png",
        None,
    )
}

pub fn antarctica() -> Country {
    Country::new("Antarctica", "Antarctica", vec![], "b.png", None)
}

/// An App whose Home view has already loaded the given countries.
pub fn loaded_app(countries: Vec<Country>) -> App {
    let mut app = App::new(Tab::Home);
    update(&mut app, Action::Start);
    update(
        &mut app,
        Action::CountriesLoaded {
            mount_id: 1,
            result: Ok(countries),
        },
    );
    app
}

/// All cell symbols of a rendered buffer, row after row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// One string per buffer row, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|c| c.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_returns_canned_result() {
        let source = StaticSource(Err(FetchError::HttpStatus(503)));
        let result = tokio_test::block_on(source.fetch_all_countries());
        assert_eq!(result, Err(FetchError::HttpStatus(503)));
    }
}
