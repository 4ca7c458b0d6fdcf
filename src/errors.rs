//! # Error Types Module
//!
//! Errors raised by the rice bot. Selection errors are caught at the
//! presentation boundary and shown to the user; configuration errors abort
//! startup.

use thiserror::Error;

/// Errors produced by the bot core and its configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BotError {
    /// The selected token is not a number or not one of the allowed amounts
    #[error("Rice amount must be one of {{0.5, 1, 1.5, 2, 2.5}}, got {input:?}")]
    InvalidSelection { input: String },

    /// Missing or malformed configuration value
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BotError {
    pub fn invalid_selection(input: impl Into<String>) -> Self {
        BotError::InvalidSelection {
            input: input.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        BotError::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_names_allowed_set() {
        let err = BotError::invalid_selection("3");
        let msg = err.to_string();
        assert!(msg.contains("{0.5, 1, 1.5, 2, 2.5}"));
        assert!(msg.contains("\"3\""));
    }

    #[test]
    fn test_config_error_display() {
        let err = BotError::config("TELEGRAM_BOT_TOKEN must be set");
        assert_eq!(
            err.to_string(),
            "Configuration error: TELEGRAM_BOT_TOKEN must be set"
        );
    }
}
