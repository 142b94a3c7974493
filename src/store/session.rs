//! Record store session lifecycle.
//!
//! A [`StoreSession`] owns exactly one connection to an in-memory SQLite
//! database. Operations take `&mut self`, so the transaction boundary
//! (session-global state on the connection) can never be entered from two
//! callers at once without external serialization.

use log::{debug, error, info};
use sqlx::{Connection, SqliteConnection};

use crate::config::IN_MEMORY_DB_URL;
use crate::error_handling::StoreError;

/// A session over a single in-memory salesperson record store.
///
/// Lifecycle: `open()` connects; [`initialize_schema`](Self::initialize_schema)
/// makes the store ready for data operations; [`close`](Self::close) releases
/// the connection, after which every operation fails with
/// [`StoreError::StoreUnavailable`]. Dropping the session also releases the
/// connection (and with it the in-memory database).
pub struct StoreSession {
    conn: Option<SqliteConnection>,
    schema_ready: bool,
}

impl StoreSession {
    /// Opens a session against a fresh in-memory SQLite database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sql` if the backend connection cannot be
    /// established.
    pub async fn open() -> Result<Self, StoreError> {
        let conn = SqliteConnection::connect(IN_MEMORY_DB_URL)
            .await
            .map_err(|e| {
                error!("Failed to connect to in-memory database: {e}");
                StoreError::Sql(e)
            })?;
        info!("Opened record store at {IN_MEMORY_DB_URL}");

        Ok(StoreSession {
            conn: Some(conn),
            schema_ready: false,
        })
    }

    /// Returns whether the session's connection is still open.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Creates the `salesperson` table.
    ///
    /// Deliberately not `CREATE TABLE IF NOT EXISTS`: the backend rejects a
    /// duplicate creation, which surfaces as
    /// [`StoreError::SchemaConflict`]. Existing rows are untouched by the
    /// failed second attempt.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session is closed and
    /// `StoreError::SchemaConflict` if the table already exists.
    pub async fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let conn = self.conn_mut()?;

        const CREATE_TABLE: &str = "CREATE TABLE salesperson (
            id INTEGER NOT NULL,
            name TEXT,
            PRIMARY KEY (id)
        )";
        debug!("executing: {CREATE_TABLE}");
        sqlx::query(CREATE_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to create salesperson table: {e}");
                StoreError::classify(e)
            })?;

        self.schema_ready = true;
        info!("Created table salesperson");
        Ok(())
    }

    /// Lists the names of the user tables currently present, sorted.
    ///
    /// Usable as soon as the session is open; the list is empty before
    /// [`initialize_schema`](Self::initialize_schema) has run.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session is closed.
    pub async fn table_names(&mut self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn_mut()?;

        let sql = "SELECT name FROM sqlite_master \
                   WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                   ORDER BY name";
        debug!("executing: {sql}");
        let names = sqlx::query_scalar::<_, String>(sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(names)
    }

    /// Closes the backend connection.
    ///
    /// Every subsequent operation, including a second `close`, fails with
    /// [`StoreError::StoreUnavailable`]. The in-memory database is discarded
    /// with the connection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session was already
    /// closed.
    pub async fn close(&mut self) -> Result<(), StoreError> {
        let conn = self.conn.take().ok_or(StoreError::StoreUnavailable)?;
        self.schema_ready = false;
        conn.close().await?;
        info!("Record store closed");
        Ok(())
    }

    /// Borrows the live connection, or reports the session as unavailable.
    pub(super) fn conn_mut(&mut self) -> Result<&mut SqliteConnection, StoreError> {
        self.conn.as_mut().ok_or(StoreError::StoreUnavailable)
    }

    /// Data operations require an open connection and a created schema.
    pub(super) fn require_schema(&self) -> Result<(), StoreError> {
        if self.conn.is_none() {
            return Err(StoreError::StoreUnavailable);
        }
        if !self.schema_ready {
            return Err(StoreError::SchemaConflict(
                "no such table: salesperson".to_string(),
            ));
        }
        Ok(())
    }
}
