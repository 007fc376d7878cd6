//! Generative text provider integration.
//!
//! The Gemini client talks to `generateContent`; the mock stands in for it
//! in service and endpoint tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GenerateContentResponse, NO_RESPONSE};
pub use mock::MockTextGenerationClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Sends one user turn and returns the raw response envelope.
    async fn generate_content(
        &self,
        prompt: &str,
        system_instructions: Option<&str>,
    ) -> Result<GenerateContentResponse>;

    /// Like [`generate_content`](Self::generate_content), reduced to its text.
    async fn generate_text(&self, prompt: &str, system_instructions: Option<&str>) -> Result<String> {
        Ok(self
            .generate_content(prompt, system_instructions)
            .await?
            .text())
    }
}
