use serde::Deserialize;

use super::source::FetchError;

/// Capital text shown for a country with an empty capitals list.
pub const NO_CAPITAL: &str = "No capital";

/// A country as read from the network. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub common_name: String,
    /// Used as the row key. Best-effort unique, see `core::state::row_keys`.
    pub official_name: String,
    pub capitals: Vec<String>,
    pub flag_image_url: String,
    flag_alt_text: Option<String>,
}

impl Country {
    pub fn new(
        common_name: impl Into<String>,
        official_name: impl Into<String>,
        capitals: Vec<String>,
        flag_image_url: impl Into<String>,
        flag_alt_text: Option<String>,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            official_name: official_name.into(),
            capitals,
            flag_image_url: flag_image_url.into(),
            flag_alt_text: flag_alt_text.filter(|alt| !alt.trim().is_empty()),
        }
    }

    /// First capital, or [`NO_CAPITAL`] when there is none.
    pub fn capital_text(&self) -> &str {
        self.capitals.first().map(String::as_str).unwrap_or(NO_CAPITAL)
    }

    /// Alt text supplied by the API, or `"<common name> flag"`.
    pub fn flag_alt_text(&self) -> String {
        self.flag_alt_text
            .clone()
            .unwrap_or_else(|| format!("{} flag", self.common_name))
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct WireName {
    common: String,
    official: String,
}

#[derive(Deserialize, Debug)]
struct WireFlags {
    png: String,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Deserialize, Debug)]
struct WireCountry {
    name: WireName,
    // Absent and null both mean "no capital".
    #[serde(default)]
    capital: Option<Vec<String>>,
    flags: WireFlags,
}

impl From<WireCountry> for Country {
    fn from(wire: WireCountry) -> Self {
        Country::new(
            wire.name.common,
            wire.name.official,
            wire.capital.unwrap_or_default(),
            wire.flags.png,
            wire.flags.alt,
        )
    }
}

/// Decodes a response body into countries, all or nothing.
///
/// The body must be a JSON array whose every element carries `name.common`,
/// `name.official` and `flags.png`. Any mismatch fails the whole call with
/// [`FetchError::Decode`]. Unknown fields are ignored.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>, FetchError> {
    let wire: Vec<WireCountry> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(wire.into_iter().map(Country::from).collect())
}
