//! Configuration constants.

/// Connection URL for the in-memory SQLite backend. Each connection to this
/// URL gets its own private database that vanishes when the connection is
/// dropped.
pub const IN_MEMORY_DB_URL: &str = "sqlite::memory:";

/// Names inserted by the demonstration run when none are supplied.
pub const DEFAULT_NAMES: [&str; 3] = ["John Doe", "Margaret", "Anna"];
