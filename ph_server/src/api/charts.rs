//! Chart pages over all stored tournaments.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use poker_hand::charts::{LineChart, bankroll_chart, roi_chart};
use poker_hand::db::TournamentFilter;
use poker_hand::tournament::TournamentRecord;

use super::AppState;
use super::tournaments::{ApiError, store_error};

async fn chart_page(
    state: &AppState,
    build: fn(&[TournamentRecord]) -> Option<LineChart>,
) -> Result<Response, ApiError> {
    let records = state
        .tournaments
        .list_tournaments(&TournamentFilter::default())
        .await
        .map_err(store_error)?;

    Ok(match build(&records) {
        Some(chart) => Html(chart.render()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Cumulative bankroll by day, `204 No Content` when nothing is stored
pub async fn bankroll(State(state): State<AppState>) -> Result<Response, ApiError> {
    chart_page(&state, bankroll_chart).await
}

/// Running ROI by tournament count, `204 No Content` when nothing is stored
pub async fn roi(State(state): State<AppState>) -> Result<Response, ApiError> {
    chart_page(&state, roi_chart).await
}
