//! Error types for store and initialization failures.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for record store operations.
///
/// Every error is surfaced synchronously to the immediate caller; none are
/// swallowed and none are retried automatically.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The session's connection is not open or has already been closed.
    #[error("record store is not open")]
    StoreUnavailable,

    /// Schema creation or a data operation referenced a table in the wrong
    /// existence state.
    #[error("schema conflict: {0}")]
    SchemaConflict(String),

    /// The insert statement failed after a transaction had begun. The
    /// transaction has already been rolled back when this surfaces, so no
    /// partial rows are visible.
    #[error("transaction rolled back: {0}")]
    TransactionFailure(#[source] sqlx::Error),

    /// Any other SQL execution error.
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a raw backend error onto a store error, recognizing SQLite's
    /// table-existence failures as schema conflicts.
    pub(crate) fn classify(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            let msg = db_err.message();
            if msg.contains("already exists") || msg.contains("no such table") {
                return StoreError::SchemaConflict(msg.to_string());
            }
        }
        StoreError::Sql(e)
    }
}
