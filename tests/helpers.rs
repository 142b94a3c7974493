// Shared test helpers for record store setup and seeding.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use record_store::StoreSession;

/// Opens an in-memory store session with the salesperson schema created.
#[allow(dead_code)] // Used by other test files
pub async fn open_ready_store() -> StoreSession {
    let mut session = StoreSession::open()
        .await
        .expect("Failed to open record store");
    session
        .initialize_schema()
        .await
        .expect("Failed to create salesperson schema");
    session
}

/// Inserts the given names and returns how many rows were written.
#[allow(dead_code)] // Used by other test files
pub async fn seed_names(session: &mut StoreSession, names: &[&str]) -> u64 {
    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    session
        .insert_records(&names)
        .await
        .expect("Failed to seed salesperson records")
}
