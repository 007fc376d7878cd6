//! Weather-aware question answering.
//!
//! Fetches current conditions for a location, embeds the raw body in the
//! chat template and asks the model under the meteorologist persona.

use crate::ai::TextGenerationService;
use crate::weather::WeatherService;
use crate::{blocking, prompts, Result};
use std::sync::Arc;
use tracing::info;

pub struct ChatbotService {
    weather: Arc<dyn WeatherService>,
    ai: Arc<dyn TextGenerationService>,
}

impl ChatbotService {
    pub fn new(weather: Arc<dyn WeatherService>, ai: Arc<dyn TextGenerationService>) -> Self {
        Self { weather, ai }
    }

    /// Builds the user turn sent alongside the persona instruction.
    pub fn compose_prompt(location: &str, weather_json: &str, question: &str) -> String {
        prompts::render(
            prompts::WEATHER_CHAT_USER,
            &[
                ("location", location),
                ("weather", weather_json),
                ("question", question),
            ],
        )
    }

    /// Answers `question` using the current weather at `location`.
    ///
    /// A weather failure returns before the model is called.
    pub async fn ask_with_weather(&self, question: &str, location: &str) -> Result<String> {
        info!("Answering weather question for '{}'", location);

        let weather_json = self.weather.fetch_current(location).await?;
        let prompt = Self::compose_prompt(location, &weather_json, question);

        self.ai
            .generate_text(&prompt, Some(prompts::WEATHER_EXPERT_SYSTEM))
            .await
    }

    /// Blocking form of [`ask_with_weather`](Self::ask_with_weather).
    pub fn ask_with_weather_blocking(&self, question: &str, location: &str) -> Result<String> {
        blocking::block_on(self.ask_with_weather(question, location))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MockTextGenerationClient, NO_RESPONSE};
    use crate::error::UpstreamError;
    use crate::weather::MockWeatherClient;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn service(
        weather: &MockWeatherClient,
        ai: &MockTextGenerationClient,
    ) -> ChatbotService {
        ChatbotService::new(Arc::new(weather.clone()), Arc::new(ai.clone()))
    }

    #[test]
    fn test_compose_prompt_layout() {
        let prompt = ChatbotService::compose_prompt("Copenhagen", r#"{"temp_c":5}"#, "Umbrella?");

        assert_eq!(
            prompt,
            "Current weather data for Copenhagen:\n{\"temp_c\":5}\n\n\
             User question: Umbrella?\n\n\
             Please analyze the weather data and answer the user's question with your expert advice."
        );
    }

    #[test]
    fn test_compose_prompt_embeds_values_literally() {
        let prompt = ChatbotService::compose_prompt("{{weather}}", "{{question}}", "q");

        assert!(prompt.starts_with("Current weather data for {{weather}}:\n{{question}}\n"));
        assert!(prompt.contains("User question: q\n"));
    }

    #[tokio::test]
    async fn test_ask_with_weather_sends_prompt_and_persona() {
        let weather = MockWeatherClient::new(r#"{"temp_c":5}"#);
        let ai = MockTextGenerationClient::new().with_text_response("Wear a coat.");

        let answer = service(&weather, &ai)
            .ask_with_weather("What should I wear?", "Copenhagen")
            .await
            .unwrap();

        assert_eq!(answer, "Wear a coat.");
        assert_eq!(weather.queries(), vec!["Copenhagen".to_string()]);

        let calls = ai.calls();
        assert_eq!(calls.len(), 1);

        let prompt = &calls[0].prompt;
        let label = prompt.find("Current weather data for Copenhagen:").unwrap();
        let body = prompt.find(r#"{"temp_c":5}"#).unwrap();
        let question = prompt.find("What should I wear?").unwrap();
        assert!(label < body && body < question);

        assert_eq!(
            calls[0].system_instructions.as_deref(),
            Some(prompts::WEATHER_EXPERT_SYSTEM)
        );
        assert!(!prompt.contains("professional meteorologist"));
    }

    #[tokio::test]
    async fn test_weather_failure_skips_model() {
        let weather = MockWeatherClient::new("").with_failure(UpstreamError::Status {
            service: "Weather API",
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "down".to_string(),
        });
        let ai = MockTextGenerationClient::new();

        let err = service(&weather, &ai)
            .ask_with_weather("q", "Nowhere")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(UpstreamError::Status { .. })));
        assert_eq!(ai.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let weather = MockWeatherClient::new("{}");
        let ai = MockTextGenerationClient::new()
            .with_failure(UpstreamError::InvalidArgument("bad".to_string()));

        let err = service(&weather, &ai)
            .ask_with_weather("q", "Oslo")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Gemini 400: bad");
    }

    #[tokio::test]
    async fn test_empty_model_response_is_sentinel() {
        let weather = MockWeatherClient::new("{}");
        let ai = MockTextGenerationClient::new();

        let answer = service(&weather, &ai).ask_with_weather("q", "Oslo").await.unwrap();
        assert_eq!(answer, NO_RESPONSE);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_matches_async() {
        let weather = MockWeatherClient::new("{}");
        let ai = MockTextGenerationClient::new().with_text_response("Clear skies.");
        let service = service(&weather, &ai);

        let answer = tokio::task::spawn_blocking(move || {
            service.ask_with_weather_blocking("Sunglasses?", "Madrid")
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(answer, "Clear skies.");
        assert_eq!(ai.calls()[0].system_instructions.as_deref(), Some(prompts::WEATHER_EXPERT_SYSTEM));
    }
}
