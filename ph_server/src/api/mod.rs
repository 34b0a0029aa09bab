//! HTTP API for the tournament results server.
//!
//! Serves the stored tournament records as JSON and the bankroll/ROI charts
//! as standalone HTML pages.
//!
//! # Modules
//!
//! - [`tournaments`]: Listing, lookup and the free-entry flag
//! - [`charts`]: Bankroll and ROI chart pages
//! - [`request_id`]: Request correlation and HTTP metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                          - Health check
//! GET  /api/v1/tournaments[?id=ID]      - List tournaments
//! GET  /api/v1/tournaments/{id}         - Get one tournament
//! PUT  /api/v1/tournaments/{id}/free    - Mark a tournament as a free entry
//! GET  /charts/bankroll                 - Bankroll chart (HTML)
//! GET  /charts/roi                      - ROI chart (HTML)
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ph_server::api::{AppState, create_router};
//! use poker_hand::db::MemoryTournamentRepository;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(Arc::new(MemoryTournamentRepository::new()));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:6969").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively; the charts are meant to be embedded.

pub mod charts;
pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
};
use poker_hand::db::{Database, TournamentRepository};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Tournament store the handlers read and update
    pub tournaments: Arc<dyn TournamentRepository>,
    /// Connection pool checked by `/health`, absent for in-memory stores
    pub database: Option<Database>,
}

impl AppState {
    /// State over a repository without a database to health-check
    pub fn new(tournaments: Arc<dyn TournamentRepository>) -> Self {
        Self {
            tournaments,
            database: None,
        }
    }

    /// State over the PostgreSQL repository of `database`
    pub fn with_database(database: Database) -> Self {
        Self {
            tournaments: Arc::new(database.tournaments()),
            database: Some(database),
        }
    }
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = create_v1_router();

    let chart_routes = Router::new()
        .route("/bankroll", get(charts::bankroll))
        .route("/roi", get(charts::roi));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .nest("/charts", chart_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/tournaments", get(tournaments::list_tournaments))
        .route("/tournaments/{id}", get(tournaments::get_tournament))
        .route("/tournaments/{id}/free", put(tournaments::free_tournament))
}

/// Health check endpoint for monitoring and load balancers.
///
/// Returns `200 OK` when the database answers (or none is configured), and
/// `503 Service Unavailable` otherwise.
///
/// ```bash
/// curl http://localhost:6969/health
/// # {"status":"healthy","version":"0.1.0","database":true,"timestamp":"2025-11-22T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.database {
        Some(db) => Some(db.health_check().await.is_ok()),
        None => None,
    };
    let healthy = database.unwrap_or(true);

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}
