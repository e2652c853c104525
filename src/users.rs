// ABOUTME: User storage built on the safe parameterized execution layer
// ABOUTME: Fixed SQL templates only; user input travels exclusively as bound parameters

use crate::connection::Connection;
use crate::cursor::ResultCursor;
use crate::errors::QueryError;
use crate::executor::QueryExecutor;
use crate::statement::{ParameterizedStatement, SqlParam};

/// Fixed lookup template. The email travels as a bound parameter; this text
/// is what the driver prepares, byte for byte, for every input.
const FIND_BY_EMAIL_SQL: &str =
    "SELECT id, email, display_name, created_at FROM users WHERE email = ?";

const INSERT_USER_SQL: &str = "INSERT INTO users (email, display_name) VALUES (?, ?)";

/// User storage over one borrowed [`Connection`].
pub struct UserStore<'c> {
    executor: QueryExecutor<'c>,
}

impl<'c> UserStore<'c> {
    /// Borrow `connection` for the store's lifetime.
    pub fn new(connection: &'c mut Connection) -> Self {
        Self {
            executor: QueryExecutor::new(connection),
        }
    }

    /// Create the users table and its email lookup index.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema migration fails or the connection is
    /// closed.
    pub async fn migrate(&mut self) -> Result<(), QueryError> {
        let table = ParameterizedStatement::new(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
            vec![],
        )?;
        self.run_to_completion(table).await?;

        // Index on email for fast lookups
        let index = ParameterizedStatement::new(
            "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
            vec![],
        )?;
        self.run_to_completion(index).await
    }

    /// Insert a user.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Execution`] if the email is already in use (the
    /// unique constraint diagnostic is propagated as-is), or an error if the
    /// connection is closed.
    pub async fn create_user(
        &mut self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<(), QueryError> {
        let statement = ParameterizedStatement::new(
            INSERT_USER_SQL,
            vec![SqlParam::from(email), SqlParam::from(display_name)],
        )?;
        self.run_to_completion(statement).await
    }

    /// Look up users by email.
    ///
    /// Returns the live cursor rather than a materialized list: the result
    /// is single-pass and rows are fetched as the caller consumes them.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the connection is closed.
    pub fn find_by_email(&mut self, email: &str) -> Result<ResultCursor<'_>, QueryError> {
        let statement =
            ParameterizedStatement::new(FIND_BY_EMAIL_SQL, vec![SqlParam::from(email)])?;
        self.executor.execute(statement)
    }

    /// Execute a statement that produces no rows, draining its cursor so
    /// resources are released before returning.
    async fn run_to_completion(
        &mut self,
        statement: ParameterizedStatement,
    ) -> Result<(), QueryError> {
        let mut cursor = self.executor.execute(statement)?;
        while cursor.next().await?.is_some() {}
        Ok(())
    }
}
