use crate::api::{error_message, rejected, AppState};
use crate::models::{PromptRequest, PromptResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

/// `POST /api/prompt`
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> (StatusCode, Json<PromptResponse>) {
    info!("POST /api/prompt");

    let result = match payload {
        Ok(Json(request)) => state.prompt.answer(&request.prompt).await,
        Err(rejection) => Err(rejected(rejection.body_text())),
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            warn!("Prompt relay failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(PromptResponse {
                    response: error_message(&e),
                }),
            )
        }
    }
}
