use crate::dtos::{LayoutDto, LayoutParams, LayoutResponse};
use crate::error::AppError;
use crate::models::Layout;
use crate::services::{BoardRenderer, LayoutPlanner};
use crate::startup::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use metrics::counter;

pub async fn scrabble_layout(
    State(state): State<AppState>,
    Query(params): Query<LayoutParams>,
) -> Result<impl IntoResponse, AppError> {
    let layout = plan_layout(&state, &params)?;
    Ok(Json(LayoutResponse {
        layout: LayoutDto::from(&layout),
    }))
}

pub async fn scrabble_board_image(
    State(state): State<AppState>,
    Query(params): Query<LayoutParams>,
) -> Result<impl IntoResponse, AppError> {
    let layout = plan_layout(&state, &params)?;
    let png = BoardRenderer::new(&state.config.board).render_png(&layout)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/png")],
        png,
    ))
}

fn plan_layout(state: &AppState, params: &LayoutParams) -> Result<Layout, AppError> {
    if params.words.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "at least one words parameter is required"
        )));
    }

    let layout = LayoutPlanner::new(&state.config.board).plan(&params.words);

    tracing::info!(
        requested = params.words.len(),
        placed = layout.placements.len(),
        unplaced = layout.unplaced.len(),
        "layout planned"
    );
    counter!("layouts_planned_total").increment(1);
    if !layout.unplaced.is_empty() {
        counter!("layout_words_unplaced_total").increment(layout.unplaced.len() as u64);
    }

    Ok(layout)
}
