//! Tournament store error types.

use std::time::Duration;
use thiserror::Error;

use super::timeouts::TimeoutError;
use crate::tournament::TournamentId;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Query did not finish in time
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Stored row cannot be turned back into a record
    #[error("Corrupt tournament row {id}: {reason}")]
    Corrupt { id: TournamentId, reason: String },

    /// Tournament not found
    #[error("Tournament not found: #{0}")]
    NotFound(TournamentId),
}

impl From<TimeoutError> for StoreError {
    fn from(err: TimeoutError) -> Self {
        match err {
            TimeoutError::Timeout(duration) => StoreError::Timeout(duration),
            TimeoutError::Database(e) => StoreError::Database(e),
        }
    }
}

impl StoreError {
    /// Get a client-safe error message that doesn't leak storage details
    pub fn client_message(&self) -> String {
        match self {
            StoreError::Database(_) | StoreError::Timeout(_) | StoreError::Corrupt { .. } => {
                "Internal server error".to_string()
            }
            StoreError::NotFound(_) => self.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_sanitizes_database_errors() {
        let err = StoreError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), "Internal server error");

        let err = StoreError::NotFound("42".to_string());
        assert_eq!(err.client_message(), "Tournament not found: #42");
    }

    #[test]
    fn test_from_timeout_error() {
        let err: StoreError = TimeoutError::Timeout(Duration::from_secs(5)).into();
        assert!(matches!(err, StoreError::Timeout(_)));
    }
}
