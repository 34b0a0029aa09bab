//! Tournament results server.
//!
//! Imports the hand history summaries found in the configured directory, then
//! serves the stored tournaments and charts over HTTP.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Error, anyhow};
use pico_args::Arguments;
use ph_server::{
    api,
    config::{Overrides, ServerConfig},
    logging, metrics,
};
use poker_hand::db::{Database, PgTournamentRepository};
use poker_hand::ingest::Ingestor;
use tracing::info;

const HELP: &str = "\
Import poker tournament summaries and serve the results

USAGE:
  ph_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:6969]
  --db-url     URL         Database connection string  [default: env DATABASE_URL]
  --dir        PATH        Summary directory           [default: env DB_BASE_DIR/DB_TOURNAMENT_DIR]

FLAGS:
  --no-ingest              Serve stored results without importing
  --continue-on-error      Skip malformed summary files instead of aborting
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DATABASE_URL             PostgreSQL connection string
  DB_BASE_DIR              Base directory of the poker client data
  DB_TOURNAMENT_DIR        Summary directory below DB_BASE_DIR
  INGEST_ON_FAILURE        abort | continue  [default: abort]
  INGEST_TIMEOUT_SECS      Upper bound for the startup import  [default: 300]
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  Variables may also be set in a .env file
";

fn parse_args() -> Result<Overrides, Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        bind: pargs.opt_value_from_str("--bind")?,
        database_url: pargs.opt_value_from_str("--db-url")?,
        summary_dir: pargs.opt_value_from_os_str("--dir", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        skip_ingest: pargs.contains("--no-ingest"),
        continue_on_error: pargs.contains("--continue-on-error"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unexpected arguments: {remaining:?}"));
    }

    Ok(overrides)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let overrides = parse_args()?;
    logging::init();

    let config = ServerConfig::from_env(overrides)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(|e| anyhow!(e))?;
        info!("Prometheus metrics exported on {}", addr);
    }

    info!("Connecting to database");
    let db = Database::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    let repo = db.tournaments();
    repo.create_schema()
        .await
        .context("Failed to create tournament schema")?;
    info!("Database connected successfully");

    if config.ingest.enabled {
        import_summaries(&config, &repo).await?;
    } else {
        info!("Summary import disabled");
    }

    let app = api::create_router(api::AppState::with_database(db));

    info!("Starting HTTP server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Import the configured summary directory, bounded by the import timeout
async fn import_summaries(
    config: &ServerConfig,
    repo: &PgTournamentRepository,
) -> Result<(), Error> {
    let ingestor = Ingestor::new(config.ingest.config());
    info!(
        "Importing summaries from {} (on failure: {})",
        config.ingest.dir.display(),
        config.ingest.on_failure
    );

    let start = Instant::now();
    let timeout = Duration::from_secs(config.ingest.timeout_secs);
    let summary = tokio::time::timeout(timeout, ingestor.run(repo))
        .await
        .map_err(|_| anyhow!("Summary import timed out after {timeout:?}"))?
        .context("Summary import failed")?;

    let elapsed = start.elapsed();
    logging::log_ingest_summary(&summary, elapsed.as_millis() as u64);
    metrics::ingest_outcomes(&summary);
    metrics::ingest_duration_ms(elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
