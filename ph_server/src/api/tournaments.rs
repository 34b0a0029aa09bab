//! Tournament API handlers.
//!
//! # Examples
//!
//! List all tournaments:
//! ```bash
//! curl http://localhost:6969/api/v1/tournaments
//! ```
//!
//! Mark a tournament as a free entry:
//! ```bash
//! curl -X PUT http://localhost:6969/api/v1/tournaments/183300341/free
//! ```

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use poker_hand::db::{StoreError, TournamentFilter};
use poker_hand::tournament::TournamentRecord;
use serde::{Deserialize, Serialize};

use super::AppState;
use super::request_id::RequestId;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error: status plus JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only the tournament with this id
    pub id: Option<String>,
}

impl From<ListQuery> for TournamentFilter {
    fn from(query: ListQuery) -> Self {
        TournamentFilter { id: query.id }
    }
}

/// Map a store error to a response, hiding storage details from clients
pub(crate) fn store_error(err: StoreError) -> ApiError {
    let status = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!(error = %err, "Tournament store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
}

/// List stored tournaments ordered by start time.
///
/// # Query Parameters
///
/// - `id`: restrict the list to one tournament
///
/// # Response
///
/// - `200 OK`: JSON array of tournament records
/// - `500 Internal Server Error`: Store failure
pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TournamentRecord>>, ApiError> {
    let filter = TournamentFilter::from(query);
    state
        .tournaments
        .list_tournaments(&filter)
        .await
        .map(Json)
        .map_err(store_error)
}

/// Get one tournament by id.
///
/// # Response
///
/// - `200 OK`: Tournament record
/// - `404 Not Found`: No tournament with this id
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TournamentRecord>, ApiError> {
    match state.tournaments.get_tournament(&id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(store_error(StoreError::NotFound(id))),
        Err(e) => Err(store_error(e)),
    }
}

/// Mark a tournament as a free entry.
///
/// Free entries count their full prize as profit in the charts.
///
/// # Response
///
/// - `200 OK`: Tournament updated
/// - `404 Not Found`: No tournament with this id
pub async fn free_tournament(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .tournaments
        .free_tournament(&id)
        .await
        .map_err(store_error)?;

    tracing::info!(
        request_id = %request_id.as_str(),
        tournament_id = %id,
        "Tournament marked as free entry"
    );
    Ok(StatusCode::OK)
}
