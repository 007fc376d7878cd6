use super::controller::{chatbot_controller, prompt_controller, weather_controller};
use super::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather/current", get(weather_controller::current))
        .route("/api/prompt", post(prompt_controller::ask))
        .route("/api/chatbot/ask", post(chatbot_controller::ask))
        .route("/api/chatbot/ask-sync", post(chatbot_controller::ask_sync))
        .with_state(state)
}
