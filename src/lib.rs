//! record_store library: transactional salesperson record storage
//!
//! This library provides a [`StoreSession`] that owns a single connection to an
//! in-memory SQLite database and exposes schema bootstrap, an all-or-nothing
//! multi-row insert, and two read projections (a typed single record and a
//! materialized list of column-name-to-value mappings).
//!
//! # Example
//!
//! ```no_run
//! use record_store::{run_demo, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     names: vec!["John Doe".to_string(), "Margaret".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_demo(config).await?;
//! println!("Inserted {} rows across tables {:?}",
//!          report.rows_inserted, report.tables);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod store;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::StoreError;
pub use run::{run_demo, DemoReport};
pub use store::{RecordMapping, SalespersonRecord, StoreSession};

// Internal run module (contains the demonstration flow)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::store::{RecordMapping, SalespersonRecord, StoreSession};

    /// Results of a completed record store demonstration run.
    #[derive(Debug, Clone)]
    pub struct DemoReport {
        /// Names of the tables present after schema creation
        pub tables: Vec<String>,
        /// Number of rows inserted by the transactional batch insert
        pub rows_inserted: u64,
        /// One row read back without an explicit ordering (backend-defined
        /// when multiple rows exist), or `None` when the table is empty
        pub first_record: Option<SalespersonRecord>,
        /// Every row projected into an independent column-to-value mapping
        pub records: Vec<RecordMapping>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the demonstration flow with the provided configuration.
    ///
    /// Opens an in-memory store, creates the `salesperson` schema, inserts
    /// `config.names` inside a single transaction, reads the rows back in
    /// both projections, and closes the store. The session is closed on
    /// every exit path, including when an intermediate step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if any store operation fails; the underlying
    /// [`StoreError`](crate::StoreError) is preserved in the error chain.
    pub async fn run_demo(config: Config) -> Result<DemoReport> {
        let start = Instant::now();

        let mut session = StoreSession::open()
            .await
            .context("Failed to open record store")?;

        let outcome = run_with_session(&mut session, &config).await;
        let closed = session.close().await;

        let mut report = outcome?;
        closed.context("Failed to close record store")?;

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Demo run complete: {} row(s) inserted, {} row(s) read back",
            report.rows_inserted,
            report.records.len()
        );
        Ok(report)
    }

    async fn run_with_session(
        session: &mut StoreSession,
        config: &Config,
    ) -> Result<DemoReport> {
        session
            .initialize_schema()
            .await
            .context("Failed to create salesperson schema")?;

        let tables = session
            .table_names()
            .await
            .context("Failed to list tables")?;
        info!("Tables present: {tables:?}");

        let rows_inserted = session
            .insert_records(&config.names)
            .await
            .context("Failed to insert salesperson records")?;

        let first_record = session
            .fetch_first_record()
            .await
            .context("Failed to fetch a salesperson record")?;

        let records = session
            .fetch_all_as_mappings()
            .await
            .context("Failed to project salesperson records")?;

        Ok(DemoReport {
            tables,
            rows_inserted,
            first_record,
            records,
            elapsed_seconds: 0.0,
        })
    }
}
