// store/models.rs
// Record types and projections

use std::collections::BTreeMap;

use serde::Serialize;

/// One row of the `salesperson` table.
///
/// The `id` is assigned by the backend at insert time (SQLite rowid alias):
/// unique and monotonically increasing by backend convention, but not
/// guaranteed contiguous. `name` carries no NOT NULL constraint in the
/// schema, so it is nullable here as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalespersonRecord {
    /// Backend-assigned primary key
    pub id: i64,
    /// Salesperson name, as stored
    pub name: Option<String>,
}

/// A single row projected into a column-name-to-value mapping.
///
/// Every mapping returned by the store is a fresh, independent value:
/// mutating one never affects another or the stored record.
pub type RecordMapping = BTreeMap<String, serde_json::Value>;
