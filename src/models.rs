//! Data models and configuration
//!
//! Request/response bodies for the HTTP endpoints and the validated startup
//! configuration for both upstream APIs.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub question: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub response: String,
}

/// `?q=` for the weather endpoint: a city name, `lat,lon`, or anything the
/// upstream accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherQuery {
    pub q: String,
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoint for the Gemini API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Credentials and endpoint for the weather API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub weather: WeatherApiConfig,
    pub bind_addr: SocketAddr,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds and validates configuration from an arbitrary key lookup.
    ///
    /// Required values are trimmed and must be non-blank afterwards.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str, what: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    Error::Config(format!(
                        "{} must be provided ({} is missing or blank)",
                        what, key
                    ))
                })
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini = GeminiConfig {
            api_key: required("GEMINI_API_KEY", "Gemini API key")?,
            base_url: required("GEMINI_API_BASEURL", "Gemini API base URL")?,
            model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        };

        let weather = WeatherApiConfig {
            api_key: required("EXT_API_KEY", "Weather API key")?,
            base_url: required("EXT_API_BASEURL", "Weather API base URL")?,
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR is not a valid socket address: {}", e)))?;

        Ok(Self {
            gemini,
            weather,
            bind_addr,
            timeout: parse_secs(
                optional("HTTP_TIMEOUT_SECS"),
                "HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?,
            connect_timeout: parse_secs(
                optional("HTTP_CONNECT_TIMEOUT_SECS"),
                "HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_secs(value: Option<String>, key: &str, default: u64) -> Result<Duration> {
    match value {
        None => Ok(Duration::from_secs(default)),
        Some(v) => v
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    key, v
                ))
            }),
    }
}
