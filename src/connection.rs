// ABOUTME: Owned SQLite connection handle with explicit, idempotent close
// ABOUTME: Executors borrow this handle; they never close it themselves

use std::fmt;

use sqlx::sqlite::SqliteConnection;
use sqlx::Connection as _;
use tracing::debug;

use crate::errors::QueryError;

/// A live database connection.
///
/// The caller owns the connection and is responsible for its eventual
/// release; [`QueryExecutor`](crate::QueryExecutor) instances only borrow
/// it. The connection is a single-writer resource: Rust's borrow rules keep
/// at most one statement in flight on it at a time.
pub struct Connection {
    inner: Option<SqliteConnection>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("open", &self.is_open())
            .finish()
    }
}

impl Connection {
    /// Open a connection to `database_url`, e.g. `sqlite::memory:` or
    /// `sqlite:users.db`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the database is unreachable.
    pub async fn open(database_url: &str) -> Result<Self, QueryError> {
        // Ensure SQLite creates the database file if it doesn't exist
        let options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let inner = SqliteConnection::connect(&options).await?;
        debug!(url = database_url, "database connection opened");
        Ok(Self { inner: Some(inner) })
    }

    /// Whether the connection has not been closed yet.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Close the connection, flushing driver state. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the driver fails to shut down
    /// cleanly; the handle is unusable afterwards either way.
    pub async fn close(&mut self) -> Result<(), QueryError> {
        if let Some(inner) = self.inner.take() {
            inner.close().await?;
            debug!("database connection closed");
        }
        Ok(())
    }

    /// The live driver handle, or [`QueryError::Connection`] once closed.
    pub(crate) fn handle(&mut self) -> Result<&mut SqliteConnection, QueryError> {
        self.inner.as_mut().ok_or_else(|| QueryError::Connection {
            message: "connection is closed".to_owned(),
        })
    }
}
