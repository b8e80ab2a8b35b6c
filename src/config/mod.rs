//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from environment variables and an optional `.env` file.

pub mod settings;
pub mod validation;

pub use settings::{
    AccessConfig, DatabaseConfig, LoggingConfig, PaymentConfig, PaymentMethod, Settings,
    TelegramConfig,
};
