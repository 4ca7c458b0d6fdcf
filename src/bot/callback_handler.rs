//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{MaybeInaccessibleMessage, MessageId};
use tracing::{debug, error, info, warn};

use crate::dialogue::RiceDialogueState;

use super::ui_builder::render_state;

/// Chat and message to edit in response to `q`
///
/// Only regular messages can be edited. Callbacks from inline mode or from
/// messages too old to access yield `None`.
pub fn edit_target(q: &CallbackQuery) -> Option<(ChatId, MessageId)> {
    match &q.message {
        Some(MaybeInaccessibleMessage::Regular(msg)) => Some((msg.chat.id, msg.id)),
        _ => None,
    }
}

/// Handle callback queries from the amount picker and the "back" button
pub async fn callback_handler(bot: Bot, q: CallbackQuery) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");
    debug!(user_id = %q.from.id, data = %data, "Received callback query from user");

    // Answer first so the client stops its loading indicator
    bot.answer_callback_query(q.id.clone()).await?;

    let state = RiceDialogueState::from_callback(data);
    match &state {
        RiceDialogueState::Menu => {
            debug!(user_id = %q.from.id, "Returning user to the amount menu");
        }
        RiceDialogueState::Result { recipe } => {
            info!(
                user_id = %q.from.id,
                rice = recipe.rice,
                water = recipe.water,
                "Computed rice recipe"
            );
        }
        RiceDialogueState::Error { input } => {
            warn!(user_id = %q.from.id, input = %input, "Rejected invalid rice selection");
        }
    }

    let Some((chat_id, message_id)) = edit_target(&q) else {
        debug!(user_id = %q.from.id, "Callback has no editable message");
        return Ok(());
    };

    let reply = render_state(&state);
    let request = bot.edit_message_text(chat_id, message_id, reply.text);
    let result = match reply.keyboard {
        Some(keyboard) => request.reply_markup(keyboard).await,
        None => request.await,
    };

    if let Err(e) = result {
        error!(user_id = %q.from.id, error = %e, "Failed to edit message for callback");
    }

    Ok(())
}
