use std::fmt;

use async_trait::async_trait;

use super::types::Country;

/// Errors that can occur while fetching the country list.
/// None of them are retried; the message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    HttpStatus(u16),
    /// The body was not a well-formed sequence of country objects.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::HttpStatus(code) => write!(f, "request failed (HTTP {code})"),
            FetchError::Decode(msg) => write!(f, "could not read country data: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Issues one request for every country. Never returns a partial list.
    async fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError>;
}
