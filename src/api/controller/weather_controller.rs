use crate::api::{error_message, rejected, AppState};
use crate::blocking;
use crate::models::WeatherQuery;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{info, warn};

/// `GET /weather/current?q=`. Blocking; responds with the upstream body as-is.
pub async fn current(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Response {
    let result = match query {
        Ok(Query(query)) => {
            info!("GET /weather/current q='{}'", query.q);
            let weather = Arc::clone(&state.weather);
            blocking::run_blocking(move || blocking::block_on(weather.fetch_current(&query.q))?)
                .await
        }
        Err(rejection) => Err(rejected(rejection.body_text())),
    };

    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            warn!("Weather lookup failed: {}", e);
            (StatusCode::BAD_REQUEST, error_message(&e)).into_response()
        }
    }
}
