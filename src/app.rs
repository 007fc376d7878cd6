//! Application wiring: builds the upstream clients and services from
//! configuration and serves the HTTP API.

use crate::ai::{GeminiClient, TextGenerationService};
use crate::api::{self, AppState};
use crate::models::Config;
use crate::services::{ChatbotService, PromptService};
use crate::weather::{WeatherApiClient, WeatherService};
use crate::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Owns the router state and the address to listen on.
pub struct App {
    state: AppState,
    bind_addr: SocketAddr,
}

/// Injectable upstream clients used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub weather: Arc<dyn WeatherService>,
    pub ai: Arc<dyn TextGenerationService>,
}

impl App {
    /// Build an app from concrete upstream clients.
    pub fn with_services(services: AppServices, bind_addr: SocketAddr) -> Self {
        let state = AppState {
            weather: Arc::clone(&services.weather),
            prompt: Arc::new(PromptService::new(Arc::clone(&services.ai))),
            chatbot: Arc::new(ChatbotService::new(services.weather, services.ai)),
        };

        Self { state, bind_addr }
    }

    /// Construct an app from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        // One connection pool shared by both upstream clients.
        let http_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "Gemini model: {} ({})",
            config.gemini.model, config.gemini.base_url
        );
        info!("Weather API: {}", config.weather.base_url);

        let ai = GeminiClient::new_with_client(&config.gemini, config.timeout, http_client.clone());
        let weather = WeatherApiClient::new_with_client(&config.weather, config.timeout, http_client);

        Ok(Self::with_services(
            AppServices {
                weather: Arc::new(weather),
                ai: Arc::new(ai),
            },
            config.bind_addr,
        ))
    }

    pub fn router(&self) -> axum::Router {
        api::router(self.state.clone())
    }

    /// Binds the listener and serves until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
