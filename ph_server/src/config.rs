//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use poker_hand::db::DatabaseConfig;
use poker_hand::ingest::{FailurePolicy, IngestConfig};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Default server bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 6969));

/// Command line overrides, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub summary_dir: Option<PathBuf>,
    pub skip_ingest: bool,
    pub continue_on_error: bool,
}

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Startup import configuration
    pub ingest: IngestSettings,
    /// Prometheus exporter address, disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
}

/// Summary import run before the server starts listening
#[derive(Debug, Clone)]
pub struct IngestSettings {
    pub enabled: bool,
    /// Directory holding the summary files
    pub dir: PathBuf,
    pub on_failure: FailurePolicy,
    /// Upper bound for the whole import
    pub timeout_secs: u64,
}

impl IngestSettings {
    /// Library import configuration for these settings
    pub fn config(&self) -> IngestConfig {
        IngestConfig::new(&self.dir).with_policy(self.on_failure)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed, or if the
    /// summary directory is not configured while import is enabled
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let bind = match overrides.bind {
            Some(bind) => bind,
            None => parse_env_opt("SERVER_BIND")?.unwrap_or(DEFAULT_BIND),
        };

        // Database configuration
        let mut database = DatabaseConfig::from_env();
        if let Some(url) = overrides.database_url {
            database.database_url = url;
        }

        // Summary directory: explicit override, else DB_BASE_DIR/DB_TOURNAMENT_DIR
        let dir = match overrides.summary_dir {
            Some(dir) => Some(dir),
            None => summary_dir_from_env(),
        };

        let enabled = !overrides.skip_ingest;
        let dir = match (dir, enabled) {
            (Some(dir), _) => dir,
            (None, false) => PathBuf::new(),
            (None, true) => {
                return Err(ConfigError::MissingRequired {
                    var: "DB_BASE_DIR".to_string(),
                    hint: "Set DB_BASE_DIR and DB_TOURNAMENT_DIR, pass --dir, or pass --no-ingest"
                        .to_string(),
                });
            }
        };

        let on_failure = if overrides.continue_on_error {
            FailurePolicy::Continue
        } else {
            match std::env::var("INGEST_ON_FAILURE") {
                Ok(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                    var: "INGEST_ON_FAILURE".to_string(),
                    reason,
                })?,
                Err(_) => FailurePolicy::default(),
            }
        };

        let ingest = IngestSettings {
            enabled,
            dir,
            on_failure,
            timeout_secs: parse_env_or("INGEST_TIMEOUT_SECS", 300),
        };

        let metrics_bind = parse_env_opt("METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            database,
            ingest,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.database_url.is_empty() {
            return Err(ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS".to_string(),
                reason: format!(
                    "Cannot exceed max connections ({})",
                    self.database.max_connections
                ),
            });
        }

        if self.ingest.enabled && self.ingest.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "INGEST_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// `DB_BASE_DIR` joined with `DB_TOURNAMENT_DIR` when the base is set
fn summary_dir_from_env() -> Option<PathBuf> {
    let base = std::env::var("DB_BASE_DIR").ok()?;
    let mut dir = PathBuf::from(base);
    if let Ok(tournaments) = std::env::var("DB_TOURNAMENT_DIR") {
        dir.push(tournaments);
    }
    Some(dir)
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Optional variable that must parse when set
fn parse_env_opt<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|e| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}
