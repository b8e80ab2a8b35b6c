//! Data models module
//!
//! Persisted entities and the registry of tables created at startup.

pub mod user;

use crate::database::schema::{Table, TableDef};

pub use user::User;

/// Every table the bot needs, in creation order
pub const SCHEMA: &[TableDef] = &[User::TABLE];
