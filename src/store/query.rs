//! Read projections over the salesperson table.

use log::debug;
use serde_json::Value;
use sqlx::Row;

use super::models::{RecordMapping, SalespersonRecord};
use super::session::StoreSession;
use crate::error_handling::StoreError;

impl StoreSession {
    /// Reads at most one row from the salesperson table.
    ///
    /// No ORDER BY is issued, so when the table holds more than one row the
    /// returned row's identity is backend-defined; callers must not assume
    /// "first inserted". An empty table yields `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session is closed and
    /// `StoreError::SchemaConflict` if the table does not exist.
    pub async fn fetch_first_record(
        &mut self,
    ) -> Result<Option<SalespersonRecord>, StoreError> {
        self.require_schema()?;
        let conn = self.conn_mut()?;

        let sql = "SELECT id, name FROM salesperson LIMIT 1";
        debug!("executing: {sql}");
        let row = sqlx::query(sql)
            .fetch_optional(&mut *conn)
            .await
            .map_err(StoreError::classify)?;

        Ok(row.map(|row| SalespersonRecord {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    /// Reads every row and projects each into a column-to-value mapping.
    ///
    /// Rows come back in whatever order the backend yields them. Each
    /// mapping is constructed fresh per row: the returned mappings share no
    /// storage with one another or with the store, so mutating one leaves
    /// the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session is closed and
    /// `StoreError::SchemaConflict` if the table does not exist.
    pub async fn fetch_all_as_mappings(
        &mut self,
    ) -> Result<Vec<RecordMapping>, StoreError> {
        self.require_schema()?;
        let conn = self.conn_mut()?;

        let sql = "SELECT id, name FROM salesperson";
        debug!("executing: {sql}");
        let rows = sqlx::query(sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(StoreError::classify)?;

        let mut mappings = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut mapping = RecordMapping::new();
            mapping.insert("id".to_string(), Value::from(row.get::<i64, _>("id")));
            let name: Option<String> = row.get("name");
            mapping.insert(
                "name".to_string(),
                name.map(Value::String).unwrap_or(Value::Null),
            );
            mappings.push(mapping);
        }
        Ok(mappings)
    }
}
