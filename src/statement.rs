// ABOUTME: Immutable pairing of a fixed SQL template with typed positional parameters
// ABOUTME: Validates placeholder arity at construction; binding never interpolates text

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

use crate::errors::QueryError;

/// A typed scalar value bound to one positional placeholder.
///
/// Values are carried by type, not by text: binding hands the value to the
/// driver's native mechanism, so content never reaches the SQL grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// UTF-8 text
    Text(String),
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision float
    Real(f64),
    /// Boolean
    Boolean(bool),
    /// Raw bytes
    Blob(Vec<u8>),
    /// SQL NULL
    Null,
}

impl SqlParam {
    /// Bind this value to the next positional slot of `query`.
    pub(crate) fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            Self::Text(value) => query.bind(value.as_str()),
            Self::Integer(value) => query.bind(*value),
            Self::Real(value) => query.bind(*value),
            Self::Boolean(value) => query.bind(*value),
            Self::Blob(value) => query.bind(value.as_slice()),
            Self::Null => query.bind(Option::<&str>::None),
        }
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<u8>> for SqlParam {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T> From<Option<T>> for SqlParam
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Fixed SQL text plus an ordered list of typed parameter values.
///
/// The template is immutable after construction and is the exact text the
/// driver prepares, byte for byte, for every input. Construction fails with
/// [`QueryError::MalformedStatement`] if the parameter count does not match
/// the number of positional `?` placeholders, or if the template is empty -
/// never later, at execution.
#[derive(Debug, Clone)]
pub struct ParameterizedStatement {
    sql: String,
    parameters: Vec<SqlParam>,
}

impl ParameterizedStatement {
    /// Pair `sql` with its positional `parameters`.
    ///
    /// # Errors
    ///
    /// [`QueryError::MalformedStatement`] if the template is empty or the
    /// parameter count does not equal the placeholder count.
    pub fn new(sql: impl Into<String>, parameters: Vec<SqlParam>) -> Result<Self, QueryError> {
        let sql = sql.into();
        if sql.trim().is_empty() {
            return Err(QueryError::MalformedStatement {
                reason: "SQL template is empty".to_owned(),
            });
        }
        let placeholders = count_placeholders(&sql);
        if placeholders != parameters.len() {
            return Err(QueryError::MalformedStatement {
                reason: format!(
                    "template has {placeholders} placeholders but {} parameters were supplied",
                    parameters.len()
                ),
            });
        }
        Ok(Self { sql, parameters })
    }

    /// The fixed SQL template.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The ordered parameter values.
    #[must_use]
    pub fn parameters(&self) -> &[SqlParam] {
        &self.parameters
    }

    /// Build the driver query: fixed text in, every parameter bound
    /// positionally by value.
    pub(crate) fn build_query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        let mut query = sqlx::query(&self.sql);
        for parameter in &self.parameters {
            query = parameter.bind(query);
        }
        query
    }
}

/// Count positional `?` markers, skipping string literals, quoted
/// identifiers, and comments so a literal `?` in `'...'` is not a slot.
fn count_placeholders(sql: &str) -> usize {
    let bytes = sql.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == quote {
                        // a doubled quote is an escaped literal, not a terminator
                        if bytes.get(i + 1) == Some(&quote) {
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
            }
            b'-' if bytes.get(i + 1) == Some(&b'-') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            b'?' => count += 1,
            _ => {}
        }
        i += 1;
    }
    count
}
