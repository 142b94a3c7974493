//! Shared test helpers for store module tests.

use crate::store::StoreSession;

/// Opens an in-memory session with the salesperson schema created.
pub async fn open_ready_session() -> StoreSession {
    let mut session = StoreSession::open()
        .await
        .expect("Failed to open record store");
    session
        .initialize_schema()
        .await
        .expect("Failed to create schema");
    session
}

/// Opens a schema-ready session seeded with the given names.
pub async fn open_seeded_session(names: &[&str]) -> StoreSession {
    let mut session = open_ready_session().await;
    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    session
        .insert_records(&names)
        .await
        .expect("Failed to seed records");
    session
}
