//! Weather-aware chatbot backend
//!
//! Fetches current conditions from a weather API, wraps them in a prompt for
//! a Gemini model, and relays the answer over a small HTTP API.

pub mod ai;
pub mod api;
pub mod app;
pub mod blocking;
pub mod error;
pub mod models;
pub mod prompts;
pub mod services;
pub mod upstream;
pub mod weather;

pub use error::{Error, Result};
