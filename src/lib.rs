// ABOUTME: Library entry point for the safequery parameterized SQL execution layer
// ABOUTME: Exposes statements, the executor, result cursors, and the user store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Safequery
//!
//! A safe parameterized query execution layer: fixed SQL templates plus
//! typed positional parameters, bound by the driver's native mechanism and
//! never by string interpolation. Results come back as a lazy, forward-only
//! cursor that releases its resources on every exit path.
//!
//! The design rests on one decision: parameter values travel in a side
//! channel (an ordered, typed list) and are bound by the driver, so no
//! value - however adversarial - can alter the query's structure. Nothing
//! in this crate inspects parameter content for SQL metacharacters, because
//! nothing needs to.
//!
//! ## Example
//!
//! ```rust,no_run
//! use safequery::{Connection, UserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), safequery::QueryError> {
//!     let mut connection = Connection::open("sqlite:users.db").await?;
//!     let mut store = UserStore::new(&mut connection);
//!     store.migrate().await?;
//!
//!     let mut cursor = store.find_by_email("alice@example.com")?;
//!     while let Some(row) = cursor.next().await? {
//!         println!("{:?}", row.get("email"));
//!     }
//!     Ok(())
//! }
//! ```

/// Owned database connection handle with explicit, idempotent close
pub mod connection;

/// Forward-only result cursor with guaranteed resource release
pub mod cursor;

/// Typed error taxonomy for the execution layer
pub mod errors;

/// Statement execution against a borrowed connection
pub mod executor;

/// Structured logging setup
pub mod logging;

/// Result rows keyed by column name
pub mod row;

/// Fixed SQL templates paired with typed positional parameters
pub mod statement;

/// User storage built on the safe execution layer
pub mod users;

pub use connection::Connection;
pub use cursor::{CursorState, ResultCursor};
pub use errors::QueryError;
pub use executor::QueryExecutor;
pub use row::{Row, SqlValue};
pub use statement::{ParameterizedStatement, SqlParam};
pub use users::UserStore;
