//! Configuration validation module
//!
//! Loading never rejects values; these checks run once in the entry point
//! before the bot is constructed.

use crate::utils::errors::{BotError, Result};
use super::Settings;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_telegram_config(&settings.telegram)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_telegram_config(config: &super::TelegramConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BotError::Config("Bot token is required".to_string()));
    }

    if !is_token_shaped(&config.token) {
        return Err(BotError::Config(
            "Bot token must look like <bot id>:<secret>".to_string(),
        ));
    }

    Ok(())
}

fn is_token_shaped(token: &str) -> bool {
    match token.split_once(':') {
        Some((id, secret)) => {
            !id.is_empty()
                && id.chars().all(|c| c.is_ascii_digit())
                && !secret.is_empty()
                && !secret.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.max_connections == 0 {
        return Err(BotError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(BotError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if !VALID_LEVELS.contains(&config.level.as_str()) {
        return Err(BotError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, VALID_LEVELS
        )));
    }

    Ok(())
}
