use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "wordboard-service: word checks, scores and board layouts"
    }))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "wordboard-service",
        "version": env!("CARGO_PKG_VERSION"),
        "lexicon_words": state.lexicon.len(),
    }))
}
