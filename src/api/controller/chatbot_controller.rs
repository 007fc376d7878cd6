use crate::api::{error_message, rejected, AppState};
use crate::blocking;
use crate::models::{ChatRequest, ChatResponse};
use crate::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{info, warn};

/// `POST /api/chatbot/ask`
pub async fn ask(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return respond(Err(rejected(rejection.body_text()))),
    };
    info!("POST /api/chatbot/ask location='{}'", request.location);

    let result = state
        .chatbot
        .ask_with_weather(&request.question, &request.location)
        .await;
    respond(result)
}

/// `POST /api/chatbot/ask-sync`. Same contract, run on the blocking pool.
pub async fn ask_sync(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return respond(Err(rejected(rejection.body_text()))),
    };
    info!("POST /api/chatbot/ask-sync location='{}'", request.location);

    let chatbot = Arc::clone(&state.chatbot);
    let result = blocking::run_blocking(move || {
        chatbot.ask_with_weather_blocking(&request.question, &request.location)
    })
    .await;
    respond(result)
}

fn respond(result: Result<String>) -> (StatusCode, Json<ChatResponse>) {
    match result {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { answer })),
        Err(e) => {
            warn!("Chatbot request failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ChatResponse {
                    answer: error_message(&e),
                }),
            )
        }
    }
}
