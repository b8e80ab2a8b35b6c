//! SubscriptionBot Telegram Bot
//!
//! Skeleton of a subscription-management bot: environment-driven settings,
//! a PostgreSQL bootstrap with a single `users` table, and two routers
//! (admin, user) guarded by a shared admin filter.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use database::Database;
pub use middleware::AdminFilter;
pub use utils::errors::{BotError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
