//! Integration tests for the HTTP API.
//!
//! The router runs against the in-memory repository, so no database is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use ph_server::api::{AppState, create_router, request_id::REQUEST_ID_HEADER};
use poker_hand::db::{MemoryTournamentRepository, TournamentRepository};
use poker_hand::tournament::{TournamentRecord, TournamentType};
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot` method

fn record(id: &str, day: u32, buy_in: f64, my_prize: f64) -> TournamentRecord {
    TournamentRecord {
        id: id.to_string(),
        name: format!("Tournament #{id}, Bounty Builder $2, Hold'em No Limit"),
        kind: TournamentType::Bounty,
        buy_in,
        players: 300,
        total_prize_pool: 600.0,
        started: Utc.with_ymd_and_hms(2025, 5, day, 19, 0, 0).unwrap(),
        my_place: 40,
        my_prize,
        reentries: 0,
        free: false,
    }
}

/// Helper to create test server over a repository with the given records
async fn create_test_server(
    records: &[TournamentRecord],
) -> (axum::Router, Arc<MemoryTournamentRepository>) {
    let repo = Arc::new(MemoryTournamentRepository::new());
    for record in records {
        repo.save_tournament(record).await.unwrap();
    }

    let app = create_router(AppState::new(repo.clone()));
    (app, repo)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_server(&[]).await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["database"].is_null());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (app, _) = create_test_server(&[]).await;

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "trace-me")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me");
}

// ============================================================================
// Tournament Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_tournaments_in_start_order() {
    let records = [record("2", 12, 2.0, 0.0), record("1", 10, 1.0, 5.0)];
    let (app, _) = create_test_server(&records).await;

    let response = app.oneshot(get("/api/v1/tournaments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "1");
    assert_eq!(list[0]["type"], "bounty");
    assert_eq!(list[1]["id"], "2");
}

#[tokio::test]
async fn test_list_tournaments_with_id() {
    let records = [record("1", 10, 1.0, 5.0), record("2", 12, 2.0, 0.0)];
    let (app, _) = create_test_server(&records).await;

    let response = app.oneshot(get("/api/v1/tournaments?id=2")).await.unwrap();
    let body = body_json(response).await;

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "2");
}

#[tokio::test]
async fn test_get_tournament() {
    let (app, _) = create_test_server(&[record("1", 10, 1.0, 5.0)]).await;

    let response = app
        .clone()
        .oneshot(get("/api/v1/tournaments/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["my_prize"], 5.0);
    assert_eq!(body["free"], false);

    let response = app.oneshot(get("/api/v1/tournaments/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Tournament not found: #999");
}

#[tokio::test]
async fn test_free_tournament() {
    let (app, repo) = create_test_server(&[record("1", 10, 1.0, 5.0)]).await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/tournaments/1/free")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(repo.get_tournament("1").await.unwrap().unwrap().free);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/tournaments/2/free")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Chart Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_charts_without_records() {
    let (app, _) = create_test_server(&[]).await;

    let response = app.clone().oneshot(get("/charts/bankroll")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/charts/roi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_bankroll_chart_page() {
    let records = [record("1", 10, 1.0, 5.0), record("2", 12, 2.0, 0.0)];
    let (app, _) = create_test_server(&records).await;

    let response = app.oneshot(get("/charts/bankroll")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = body_text(response).await;
    assert!(html.contains("echarts.init"));
    assert!(html.contains("05.10.2025"));
    assert!(html.contains("\"4.00\""));
    assert!(html.contains("\"2.00\""));
}

#[tokio::test]
async fn test_roi_chart_page() {
    let (app, _) = create_test_server(&[record("1", 10, 1.0, 5.0)]).await;

    let response = app.oneshot(get("/charts/roi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Current ROI"));
    assert!(html.contains("\"400.00\""));
}
