//! Current-conditions lookup against a WeatherAPI.com-style provider.
//!
//! The body is returned verbatim; nothing here parses it.

pub mod client;
pub mod filter;
pub mod mock;

pub use client::WeatherApiClient;
pub use filter::{ApiKeyQuery, FilteredClient, RequestFilter};
pub use mock::MockWeatherClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetches current conditions for `query` as the raw upstream body.
    async fn fetch_current(&self, query: &str) -> Result<String>;
}
