//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `record_store` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use record_store::initialization::init_logger_with;
use record_store::{run_demo, Config, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "record_store",
    about = "Inserts salesperson records transactionally into an in-memory SQLite database and reads them back"
)]
struct Cli {
    /// Names to insert; defaults to the built-in demo names when omitted
    names: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Config::default();
        Config {
            names: if cli.names.is_empty() {
                defaults.names
            } else {
                cli.names
            },
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Cli::parse().into();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_demo(config).await {
        Ok(report) => {
            if let Some(record) = &report.first_record {
                println!(
                    "First row (backend-defined order): id={}, name={}",
                    record.id,
                    record.name.as_deref().unwrap_or("NULL")
                );
            }
            for mapping in &report.records {
                println!(
                    "{}",
                    serde_json::to_string(mapping).context("Failed to render record mapping")?
                );
            }
            println!(
                "✅ Inserted {} record{} and read back {} in {:.3}s (tables: {})",
                report.rows_inserted,
                if report.rows_inserted == 1 { "" } else { "s" },
                report.records.len(),
                report.elapsed_seconds,
                report.tables.join(", ")
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("record_store error: {:#}", e);
            process::exit(1);
        }
    }
}
