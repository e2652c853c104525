// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and seeded in-memory databases
#![allow(dead_code)]

use anyhow::Result;
use safequery::logging::{LogFormat, LoggingConfig};
use safequery::{Connection, UserStore};

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    // TEST_LOG=debug (etc.) raises the level for a noisy run
    let level = std::env::var("TEST_LOG").unwrap_or_else(|_| "warn".into());
    LoggingConfig {
        level,
        format: LogFormat::Compact,
    }
    .init();
}

/// Open a fresh in-memory database with the users schema applied.
pub async fn create_test_connection() -> Result<Connection> {
    init_test_logging();
    let mut connection = Connection::open("sqlite::memory:").await?;
    UserStore::new(&mut connection).migrate().await?;
    Ok(connection)
}

/// Open a migrated in-memory database seeded with the given emails.
pub async fn create_seeded_connection(emails: &[&str]) -> Result<Connection> {
    let mut connection = create_test_connection().await?;
    let mut store = UserStore::new(&mut connection);
    for email in emails {
        store.create_user(email, Some("Test User")).await?;
    }
    drop(store);
    Ok(connection)
}
