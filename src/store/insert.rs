//! Transactional batch insert.

use log::{debug, error, info};
use sqlx::Connection;

use super::session::StoreSession;
use crate::error_handling::StoreError;

impl StoreSession {
    /// Inserts one salesperson row per name, all-or-nothing.
    ///
    /// The whole batch goes through a single multi-row parameterized INSERT
    /// inside one transaction, with ids left to the backend in insertion
    /// order. On success all rows become visible atomically; on failure the
    /// transaction is rolled back before the error is surfaced, so no
    /// external reader ever observes a subset of the batch.
    ///
    /// An empty `names` slice is a no-op: no transaction is opened and the
    /// call returns `Ok(0)`.
    ///
    /// # Returns
    ///
    /// The number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the session is closed,
    /// `StoreError::SchemaConflict` if the salesperson table does not exist,
    /// and `StoreError::TransactionFailure` if the insert statement fails
    /// after the transaction has begun (the rollback has already run when
    /// the error surfaces).
    pub async fn insert_records(&mut self, names: &[String]) -> Result<u64, StoreError> {
        if !self.is_open() {
            return Err(StoreError::StoreUnavailable);
        }
        if names.is_empty() {
            debug!("no names to insert; skipping transaction");
            return Ok(0);
        }
        self.require_schema()?;

        let placeholders = vec!["(?)"; names.len()].join(", ");
        let sql = format!("INSERT INTO salesperson (name) VALUES {placeholders}");

        let conn = self.conn_mut()?;
        let mut tx = conn.begin().await?;

        debug!("executing: {sql}");
        let mut query = sqlx::query(&sql);
        for name in names {
            query = query.bind(name.as_str());
        }

        match query.execute(&mut *tx).await {
            Ok(done) => {
                tx.commit().await?;
                info!("Inserted {} salesperson record(s)", done.rows_affected());
                Ok(done.rows_affected())
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback after failed insert also failed: {rollback_err}");
                }
                error!("Insert failed, transaction rolled back: {e}");
                Err(StoreError::TransactionFailure(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_helpers::open_ready_session;

    #[tokio::test]
    async fn test_insert_returns_row_count() {
        let mut session = open_ready_session().await;
        let inserted = session
            .insert_records(&["John Doe".to_string(), "Margaret".to_string()])
            .await
            .expect("Failed to insert records");
        assert_eq!(inserted, 2);
    }

    #[tokio::test]
    async fn test_insert_empty_batch_is_a_no_op() {
        let mut session = open_ready_session().await;
        let inserted = session
            .insert_records(&[])
            .await
            .expect("Empty insert should succeed");
        assert_eq!(inserted, 0);

        let records = session
            .fetch_all_as_mappings()
            .await
            .expect("Failed to read records");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_insert_before_schema_is_a_schema_conflict() {
        let mut session = StoreSession::open().await.expect("Failed to open store");

        let err = session
            .insert_records(&["John Doe".to_string()])
            .await
            .expect_err("Insert without schema should fail");
        assert!(matches!(err, StoreError::SchemaConflict(_)));

        // No rows may be visible after the failed call
        session
            .initialize_schema()
            .await
            .expect("Failed to create schema");
        let records = session
            .fetch_all_as_mappings()
            .await
            .expect("Failed to read records");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_inserted_ids_are_distinct_and_increasing() {
        let mut session = open_ready_session().await;
        session
            .insert_records(&["a".to_string(), "b".to_string(), "c".to_string()])
            .await
            .expect("Failed to insert records");

        let mut ids: Vec<i64> = session
            .fetch_all_as_mappings()
            .await
            .expect("Failed to read records")
            .iter()
            .map(|m| m["id"].as_i64().expect("id should be an integer"))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
