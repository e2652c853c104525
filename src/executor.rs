// ABOUTME: Compiles parameterized statements against a borrowed connection
// ABOUTME: Produces lazy, forward-only result cursors; never retries, never closes

use async_stream::stream;
use futures_util::StreamExt;
use tracing::debug;

use crate::connection::Connection;
use crate::cursor::ResultCursor;
use crate::errors::QueryError;
use crate::statement::ParameterizedStatement;

/// Executes [`ParameterizedStatement`]s on one borrowed [`Connection`].
///
/// The executor never closes the connection and performs no retries; retry
/// policy, if any, belongs to the caller. The cursor returned by
/// [`execute`](Self::execute) holds the connection's mutable borrow until it
/// is dropped, so a second execution cannot overlap an in-flight statement
/// and the connection cannot be closed mid-iteration.
#[derive(Debug)]
pub struct QueryExecutor<'c> {
    connection: &'c mut Connection,
}

impl<'c> QueryExecutor<'c> {
    /// Borrow `connection` for the executor's lifetime.
    pub fn new(connection: &'c mut Connection) -> Self {
        Self { connection }
    }

    /// Execute `statement`, returning a lazy cursor over the result rows.
    ///
    /// The fixed SQL text reaches the driver's prepared-statement machinery
    /// untouched (sqlx caches the parsed plan per connection) and every
    /// parameter is bound positionally by type-preserving value. The driver
    /// is not polled until the first [`ResultCursor::next`] call, so
    /// database-reported failures for the statement itself surface there as
    /// [`QueryError::Execution`], carrying the database diagnostic
    /// unmodified.
    ///
    /// The statement is consumed: the cursor owns it for the duration of
    /// iteration, and re-reading the rows requires building and executing a
    /// new statement.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Connection`] if the connection has been closed;
    /// no cursor is produced in that case.
    pub fn execute(
        &mut self,
        statement: ParameterizedStatement,
    ) -> Result<ResultCursor<'_>, QueryError> {
        let handle = self.connection.handle()?;
        debug!(
            sql = statement.sql(),
            parameters = statement.parameters().len(),
            "executing parameterized statement"
        );

        // The generator owns the statement, so the SQL text and bound
        // values outlive the driver's row stream.
        let rows = stream! {
            let mut driver_rows = statement.build_query().fetch(handle);
            while let Some(row) = driver_rows.next().await {
                yield row;
            }
        };
        Ok(ResultCursor::new(rows.boxed()))
    }
}
