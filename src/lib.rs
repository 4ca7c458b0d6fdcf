//! # Rice Bot
//!
//! A Telegram bot that lets the user pick an amount of rice and replies with
//! the amount of water needed to cook it.

pub mod bot;
pub mod config;
pub mod dialogue;
pub mod errors;
pub mod localization;
pub mod observability;
pub mod recipe;

// Re-export types for easier access
pub use config::BotConfig;
pub use dialogue::RiceDialogueState;
pub use errors::BotError;
pub use recipe::{parse_selection, validate_rice_amount, Recipe};
