//! Error handling for SubscriptionBot
//!
//! This module defines the error type shared by every component
//! and the `Result` alias used throughout the crate.

use thiserror::Error;

/// Main error type for SubscriptionBot
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polling task failed: {0}")]
    Polling(#[from] tokio::task::JoinError),
}

impl From<config::ConfigError> for BotError {
    fn from(err: config::ConfigError) -> Self {
        BotError::Config(err.to_string())
    }
}

/// Result type alias for SubscriptionBot operations
pub type Result<T> = std::result::Result<T, BotError>;
