//! REST Countries client.
//!
//! One GET per call against `{base_url}/all`, projected down to the three
//! fields the list needs. No caching, no retry.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::countries::{Country, CountrySource, FetchError, decode_countries};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field projection sent with every request.
const FIELDS: &str = "name,capital,flags";

pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/all", self.base_url)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all_countries(&self) -> Result<Vec<Country>, FetchError> {
        let url = self.endpoint();
        info!("Fetching countries: GET {}?fields={}", url, FIELDS);

        let response = self
            .client
            .get(&url)
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .map_err(|e| {
                warn!("Country request failed: {}", e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Country response status: {}", status);

        if !status.is_success() {
            warn!("Country endpoint returned HTTP {}", status.as_u16());
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read country response body: {}", e);
            FetchError::Network(e.to_string())
        })?;
        debug!("Country response body: {} bytes", body.len());

        let countries = decode_countries(&body).inspect_err(|e| {
            warn!("Country response did not decode: {}", e);
        })?;

        info!("Decoded {} countries", countries.len());
        Ok(countries)
    }
}
