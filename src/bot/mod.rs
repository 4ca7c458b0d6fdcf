//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: handles `/start`, `/help` and other text
//! - `callback_handler`: handles inline keyboard callback queries
//! - `ui_builder`: creates keyboards and formats replies

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

pub use ui_builder::{callback_reply, menu_reply, render_state, BotReply};
