use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::TextGenerationService;
use crate::error::UpstreamError;
use crate::models::GeminiConfig;
use crate::upstream::{self, StatusRule, GENERIC_ERROR_RULE};
use crate::{blocking, Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const SERVICE: &str = "Gemini";

/// Specific statuses first; the catch-all must stay last.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        matches: is_bad_request,
        build: invalid_argument,
    },
    StatusRule {
        matches: is_unauthorized,
        build: unauthorized,
    },
    StatusRule {
        matches: is_not_found,
        build: not_found,
    },
    GENERIC_ERROR_RULE,
];

fn is_bad_request(status: StatusCode) -> bool {
    status == StatusCode::BAD_REQUEST
}

fn is_unauthorized(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED
}

fn is_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

fn invalid_argument(_: &'static str, _: StatusCode, body: String) -> UpstreamError {
    UpstreamError::InvalidArgument(body)
}

fn unauthorized(_: &'static str, _: StatusCode, body: String) -> UpstreamError {
    UpstreamError::Unauthorized(body)
}

fn not_found(_: &'static str, _: StatusCode, body: String) -> UpstreamError {
    UpstreamError::NotFound(body)
}

/// Gemini REST client for `generateContent`.
///
/// Authenticates with the `x-goog-api-key` header on every request.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Self {
        Self::new_with_client(config, timeout, Client::new())
    }

    pub fn new_with_client(config: &GeminiConfig, timeout: Duration, client: Client) -> Self {
        let model = config
            .model
            .strip_prefix("models/")
            .unwrap_or(&config.model)
            .to_string();

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model,
            timeout,
        }
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Blocking form of [`TextGenerationService::generate_text`].
    pub fn generate_text_blocking(
        &self,
        prompt: &str,
        system_instructions: Option<&str>,
    ) -> Result<String> {
        blocking::block_on(self.generate_text(prompt, system_instructions))?
    }
}

#[async_trait]
impl TextGenerationService for GeminiClient {
    async fn generate_content(
        &self,
        prompt: &str,
        system_instructions: Option<&str>,
    ) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest::new(prompt, system_instructions);

        tracing::debug!(
            "Sending generateContent request to Gemini (model: {}, system instruction: {})",
            self.model,
            request.system_instruction.is_some()
        );

        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let body = upstream::check_response(response, STATUS_RULES, SERVICE).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })
    }
}
