//! Request-level operations composed from the upstream clients.

pub mod chatbot;
pub mod prompt;

pub use chatbot::ChatbotService;
pub use prompt::PromptService;
