// ABOUTME: Column-name-keyed rows of scalar values decoded from driver rows
// ABOUTME: Preserves result column order and SQLite's dynamic scalar typing

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

use crate::errors::QueryError;

/// A scalar value read from one result column.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl SqlValue {
    /// The text content, if this value is `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The integer content, if this value is `Integer`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this value is SQL NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// One result row: an ordered mapping from column name to [`SqlValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Decode a driver row column by column, keyed by declared type.
    pub(crate) fn from_driver(row: &SqliteRow) -> Result<Self, QueryError> {
        let mut columns = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());
        for column in row.columns() {
            let ordinal = column.ordinal();
            let raw = row.try_get_raw(ordinal)?;
            let value = if raw.is_null() {
                SqlValue::Null
            } else {
                match raw.type_info().name() {
                    "INTEGER" => SqlValue::Integer(row.try_get(ordinal)?),
                    "BOOLEAN" => SqlValue::Integer(i64::from(row.try_get::<bool, _>(ordinal)?)),
                    "REAL" => SqlValue::Real(row.try_get(ordinal)?),
                    "BLOB" => SqlValue::Blob(row.try_get(ordinal)?),
                    _ => SqlValue::Text(row.try_get(ordinal)?),
                }
            };
            columns.push(column.name().to_owned());
            values.push(value);
        }
        Ok(Self { columns, values })
    }

    /// Value of the named column, or `None` if no such column exists.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| &self.values[index])
    }

    /// Column names in result order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
