use super::gemini::types::{Candidate, Content, Part};
use super::{GenerateContentResponse, TextGenerationService};
use crate::error::UpstreamError;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A recorded call: the prompt and the system instructions, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGeneration {
    pub prompt: String,
    pub system_instructions: Option<String>,
}

/// In-memory [`TextGenerationService`] that records every call.
#[derive(Clone)]
pub struct MockTextGenerationClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    failure: Option<UpstreamError>,
    calls: Arc<Mutex<Vec<RecordedGeneration>>>,
}

impl MockTextGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queues a single-candidate, single-part response.
    pub fn with_text_response(self, text: &str) -> Self {
        self.with_response(GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: Some(vec![Part::text(text)]),
                }),
            }]),
        })
    }

    /// Every call fails with `error`.
    pub fn with_failure(mut self, error: UpstreamError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedGeneration> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockTextGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextGenerationClient {
    async fn generate_content(
        &self,
        prompt: &str,
        system_instructions: Option<&str>,
    ) -> Result<GenerateContentResponse> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedGeneration {
                prompt: prompt.to_string(),
                system_instructions: system_instructions.map(str::to_string),
            });
            calls.len()
        };

        if let Some(error) = &self.failure {
            return Err(error.clone().into());
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(GenerateContentResponse::default())
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
