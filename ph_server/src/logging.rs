//! Structured logging configuration.
//!
//! The library logs through the `log` facade; the subscriber installed here
//! picks those records up alongside the server's own `tracing` events.

use poker_hand::ingest::IngestSummary;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,hyper=warn";

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use ph_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log the outcome of a summary import
///
/// Failures are logged at warn level so a `continue` import with broken
/// files does not go unnoticed.
///
/// # Example
///
/// ```
/// use ph_server::logging::log_ingest_summary;
/// use poker_hand::ingest::IngestSummary;
///
/// let summary = IngestSummary {
///     files: 3,
///     parsed: 2,
///     skipped: 1,
///     failed: 0,
///     inserted: 2,
/// };
/// log_ingest_summary(&summary, 40);
/// ```
pub fn log_ingest_summary(summary: &IngestSummary, duration_ms: u64) {
    if summary.failed > 0 {
        tracing::warn!(
            files = summary.files,
            parsed = summary.parsed,
            skipped = summary.skipped,
            failed = summary.failed,
            inserted = summary.inserted,
            duration_ms = duration_ms,
            "Summary import completed with failures"
        );
    } else {
        tracing::info!(
            files = summary.files,
            parsed = summary.parsed,
            skipped = summary.skipped,
            inserted = summary.inserted,
            duration_ms = duration_ms,
            "Summary import completed"
        );
    }
}

/// Log API request/response
///
/// # Arguments
///
/// * `request_id` - Correlation id of the request
/// * `method` - HTTP method
/// * `path` - Request path
/// * `status_code` - Response status code
/// * `duration_ms` - Request duration in milliseconds
pub fn log_api_request(
    request_id: &str,
    method: &str,
    path: &str,
    status_code: u16,
    duration_ms: u64,
) {
    if status_code >= 500 {
        tracing::warn!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request failed"
        );
    } else {
        tracing::info!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ingest_summary() {
        // Just ensure it doesn't panic
        let mut summary = IngestSummary {
            files: 10,
            parsed: 8,
            skipped: 2,
            failed: 0,
            inserted: 8,
        };
        log_ingest_summary(&summary, 120);
        summary.failed = 1;
        log_ingest_summary(&summary, 120);
    }

    #[test]
    fn test_log_api_request() {
        log_api_request("req-1", "GET", "/api/v1/tournaments", 200, 45);
        log_api_request("req-2", "PUT", "/api/v1/tournaments/1/free", 500, 120);
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
