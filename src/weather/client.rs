use super::filter::{ApiKeyQuery, FilteredClient};
use super::WeatherService;
use crate::models::WeatherApiConfig;
use crate::upstream::{self, StatusRule, GENERIC_ERROR_RULE};
use crate::{blocking, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const SERVICE: &str = "Weather API";
const STATUS_RULES: &[StatusRule] = &[GENERIC_ERROR_RULE];

/// WeatherAPI.com client. The API key travels as the `key` query parameter,
/// added by a filter on this client's requests.
pub struct WeatherApiClient {
    http: FilteredClient,
    base_url: String,
    timeout: Duration,
}

impl WeatherApiClient {
    pub fn new(config: &WeatherApiConfig, timeout: Duration) -> Self {
        Self::new_with_client(config, timeout, Client::new())
    }

    pub fn new_with_client(config: &WeatherApiConfig, timeout: Duration, client: Client) -> Self {
        let http = FilteredClient::new(client)
            .with_filter(ApiKeyQuery::new("key", config.api_key.clone()));

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Blocking form of [`WeatherService::fetch_current`].
    pub fn fetch_current_blocking(&self, query: &str) -> Result<String> {
        blocking::block_on(self.fetch_current(query))?
    }
}

#[async_trait]
impl WeatherService for WeatherApiClient {
    async fn fetch_current(&self, query: &str) -> Result<String> {
        tracing::debug!("Fetching current weather for '{}'", query);

        let url = format!("{}/current.json", self.base_url);
        let builder = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .query(&[("q", query)]);

        let response = self.http.execute(builder).await.map_err(|e| {
            tracing::error!("Failed to send request to Weather API: {}", e);
            e
        })?;

        upstream::check_response(response, STATUS_RULES, SERVICE).await
    }
}
