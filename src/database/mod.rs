//! Database module
//!
//! This module owns the connection pool lifecycle and the table registry types

pub mod connection;
pub mod schema;

pub use connection::{Database, DatabasePool, Session};
pub use schema::{Table, TableDef};
