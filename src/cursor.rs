// ABOUTME: Forward-only result cursor with guaranteed release on every exit path
// ABOUTME: Open -> Exhausted | Closed state machine over the driver row stream

use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use sqlx::sqlite::SqliteRow;
use tracing::trace;

use crate::errors::QueryError;
use crate::row::Row;

type RowStream<'c> = BoxStream<'c, Result<SqliteRow, sqlx::Error>>;

/// Cursor lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Resources held; [`ResultCursor::next`] available.
    Open,
    /// End of sequence reached; resources released.
    Exhausted,
    /// Explicitly closed, or released after a mid-stream error.
    Closed,
}

/// A lazy, forward-only, single-pass sequence of result rows.
///
/// The cursor owns the prepared statement and driver row stream it wraps
/// and releases both on every exit path: full consumption, a mid-stream
/// error, an explicit [`close`](Self::close), or drop. Exactly one of those
/// paths runs the release; the others find nothing left to free. A cursor
/// is never re-iterable - re-executing the statement is the only way to
/// read the rows again.
pub struct ResultCursor<'c> {
    rows: Option<RowStream<'c>>,
    state: CursorState,
}

impl<'c> ResultCursor<'c> {
    pub(crate) fn new(rows: RowStream<'c>) -> Self {
        Self {
            rows: Some(rows),
            state: CursorState::Open,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Advance one row, suspending only while waiting on database I/O.
    ///
    /// Returns `Ok(None)` exactly once, at end of sequence; the cursor then
    /// releases its resources synchronously. A mid-stream failure also
    /// releases resources before propagating - rows already yielded remain
    /// valid, but no further rows are produced.
    ///
    /// # Errors
    ///
    /// - [`QueryError::CursorClosed`] if the cursor is exhausted or closed
    /// - [`QueryError::Execution`] / [`QueryError::Bind`] /
    ///   [`QueryError::Connection`] for failures reported by the driver
    pub async fn next(&mut self) -> Result<Option<Row>, QueryError> {
        let Some(rows) = self.rows.as_mut() else {
            return Err(QueryError::CursorClosed);
        };
        match rows.next().await {
            Some(Ok(driver_row)) => match Row::from_driver(&driver_row) {
                Ok(row) => Ok(Some(row)),
                Err(err) => {
                    self.release(CursorState::Closed);
                    Err(err)
                }
            },
            Some(Err(err)) => {
                self.release(CursorState::Closed);
                Err(err.into())
            }
            None => {
                self.release(CursorState::Exhausted);
                Ok(None)
            }
        }
    }

    /// Release resources immediately, regardless of consumption progress.
    ///
    /// Idempotent and callable from any state; a cursor that has already
    /// released (exhausted, errored, or previously closed) just records the
    /// `Closed` state.
    pub fn close(&mut self) {
        self.release(CursorState::Closed);
    }

    fn release(&mut self, state: CursorState) {
        if self.rows.take().is_some() {
            trace!(?state, "cursor resources released");
        }
        self.state = state;
    }
}
