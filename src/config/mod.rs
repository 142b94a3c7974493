//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (database URL, default demo names)
//! - CLI option types and the library configuration struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
