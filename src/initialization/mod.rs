//! Initialization routines for application startup.

mod logger;

pub use logger::init_logger_with;
