//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use teloxide::prelude::*;
use tracing::debug;

use crate::localization::t;

use super::ui_builder::{menu_reply, BotReply};

/// Text commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    Start,
    Help,
    Other,
}

impl TextCommand {
    /// Classify a message text. A `@botname` suffix on the command is ignored.
    pub fn parse(text: &str) -> Self {
        let command = text
            .split_whitespace()
            .next()
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("");

        match command {
            "/start" => TextCommand::Start,
            "/help" => TextCommand::Help,
            _ => TextCommand::Other,
        }
    }
}

/// Build the reply to a text message
pub fn text_reply(text: &str) -> BotReply {
    match TextCommand::parse(text) {
        TextCommand::Start => menu_reply(),
        TextCommand::Help => BotReply {
            text: t("help-text"),
            keyboard: None,
        },
        TextCommand::Other => BotReply {
            text: t("text-hint"),
            keyboard: None,
        },
    }
}

pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    debug!(
        chat_id = %msg.chat.id,
        command = ?TextCommand::parse(text),
        "Received text message"
    );

    let reply = text_reply(text);
    let request = bot.send_message(msg.chat.id, reply.text);
    match reply.keyboard {
        Some(keyboard) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };

    Ok(())
}
