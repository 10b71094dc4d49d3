use thiserror::Error;

/// Error surfaced by repository implementations.
///
/// Adapters flatten driver errors to a message; callers decide between
/// retry (HTTP 5xx, provider redelivers) and failure propagation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
