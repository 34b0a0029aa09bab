//! Prometheus metrics for the tournament results server.
//!
//! Metrics are exposed in Prometheus text format on a separate listener when
//! `METRICS_BIND` is configured. Without an installed exporter the recording
//! functions are no-ops.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Import Metrics**: Summary files by outcome, newly stored tournaments
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ph_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::http_requests_total("GET", "/api/v1/tournaments", 200);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use poker_hand::ingest::IngestSummary;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// Increments the total HTTP request counter with method, path, and status labels.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Import Metrics
// ============================================================================

/// Record the per-outcome file counts of one import run.
pub fn ingest_outcomes(summary: &IngestSummary) {
    for (outcome, count) in [
        ("parsed", summary.parsed),
        ("skipped", summary.skipped),
        ("failed", summary.failed),
    ] {
        metrics::counter!("ingest_files_total", "outcome" => outcome).increment(count as u64);
    }
    metrics::counter!("ingest_tournaments_inserted_total").increment(summary.inserted as u64);
}

/// Record import duration in milliseconds.
pub fn ingest_duration_ms(duration_ms: f64) {
    metrics::histogram!("ingest_duration_ms").record(duration_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter() {
        // No recorder installed: all calls are no-ops
        http_requests_total("GET", "/health", 200);
        http_request_duration_ms("GET", "/health", 1.5);
        ingest_outcomes(&IngestSummary::default());
        ingest_duration_ms(12.0);
    }
}
