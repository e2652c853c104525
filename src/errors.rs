// ABOUTME: Typed error taxonomy for statement construction, execution, and cursor use
// ABOUTME: Maps driver-level sqlx failures onto the crate's error variants

/// Errors surfaced by the parameterized query layer.
///
/// None of these are recovered internally: every failure aborts the current
/// query attempt and is handed to the caller verbatim. There are no retries
/// and no fallback paths.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The statement could not be constructed (a caller bug, caught before
    /// anything touches the database).
    #[error("malformed statement: {reason}")]
    MalformedStatement {
        /// What was wrong with the template or parameter list
        reason: String,
    },

    /// The connection is closed or unreachable.
    #[error("connection error: {message}")]
    Connection {
        /// Driver diagnostic
        message: String,
    },

    /// A parameter value could not be encoded for its positional slot.
    #[error("bind error: {message}")]
    Bind {
        /// Driver diagnostic for the failed encode
        message: String,
    },

    /// The database reported a failure while executing the statement.
    #[error("execution error: {message}")]
    Execution {
        /// Database diagnostic, propagated unmodified
        message: String,
    },

    /// The cursor was advanced after exhaustion or an explicit close.
    #[error("cursor is closed")]
    CursorClosed,
}

impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => Self::Execution {
                message: db.message().to_owned(),
            },
            sqlx::Error::Encode(source) => Self::Bind {
                message: source.to_string(),
            },
            sqlx::Error::Io(source) => Self::Connection {
                message: source.to_string(),
            },
            sqlx::Error::Tls(source) => Self::Connection {
                message: source.to_string(),
            },
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::WorkerCrashed => {
                Self::Connection {
                    message: err.to_string(),
                }
            }
            other => Self::Execution {
                message: other.to_string(),
            },
        }
    }
}
