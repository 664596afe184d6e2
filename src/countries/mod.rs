pub mod rest;
pub mod source;
pub mod types;

pub use rest::{DEFAULT_BASE_URL, RestCountriesClient};
pub use source::{CountrySource, FetchError};
pub use types::{Country, NO_CAPITAL, decode_countries};
