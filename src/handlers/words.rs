use crate::dtos::{CheckWordParams, CheckWordResponse};
use crate::services::scoring::score_word;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use metrics::counter;

pub async fn check_word(
    State(state): State<AppState>,
    Query(params): Query<CheckWordParams>,
) -> impl IntoResponse {
    let exists = state.lexicon.contains(&params.word);
    let score = score_word(&state.lexicon, &params.word);

    counter!(
        "word_checks_total",
        "exists" => if exists { "true" } else { "false" }
    )
    .increment(1);
    tracing::debug!(word = %params.word, exists, score, "word checked");

    Json(CheckWordResponse {
        word: params.word,
        exists,
        score,
    })
}
