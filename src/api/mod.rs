//! HTTP surface: routes, shared state and per-route controllers.
//!
//! Every service error is answered with `400 Bad Request` and an
//! `Error: <message>` body; nothing is surfaced as a 5xx.

pub mod controller;
pub mod router;

pub use router::router;

use crate::services::{ChatbotService, PromptService};
use crate::weather::WeatherService;
use crate::Error;
use std::sync::Arc;

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherService>,
    pub prompt: Arc<PromptService>,
    pub chatbot: Arc<ChatbotService>,
}

pub(crate) fn error_message(error: &Error) -> String {
    format!("Error: {}", error)
}

/// A body or query the extractor could not decode. Reported through the
/// same `Error: ...` envelope as service failures.
pub(crate) fn rejected(body_text: String) -> Error {
    Error::InvalidRequest(body_text)
}
