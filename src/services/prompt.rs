use crate::ai::{GenerateContentResponse, TextGenerationService, NO_RESPONSE};
use crate::models::PromptResponse;
use crate::Result;
use std::sync::Arc;

/// Relays a bare prompt to the model, without any system instruction.
pub struct PromptService {
    ai: Arc<dyn TextGenerationService>,
}

impl PromptService {
    pub fn new(ai: Arc<dyn TextGenerationService>) -> Self {
        Self { ai }
    }

    pub async fn answer(&self, prompt: &str) -> Result<PromptResponse> {
        tracing::debug!("Relaying prompt ({} chars)", prompt.len());

        let response = self.ai.generate_content(prompt, None).await?;
        Ok(Self::flatten(&response))
    }

    fn flatten(response: &GenerateContentResponse) -> PromptResponse {
        let mut combined = String::new();
        let mut found = false;

        for candidate in response.candidates.iter().flatten() {
            let Some(parts) = candidate.content.as_ref().and_then(|c| c.parts.as_ref()) else {
                continue;
            };
            for text in parts.iter().filter_map(|p| p.text.as_deref()) {
                combined.push_str(text);
                found = true;
            }
        }

        PromptResponse {
            response: if found { combined } else { NO_RESPONSE.to_string() },
        }
    }
}
