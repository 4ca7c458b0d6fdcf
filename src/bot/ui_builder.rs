//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::dialogue::{RiceDialogueState, BACK_CALLBACK};
use crate::localization::{t, t_args};
use crate::recipe::{allowed_amounts_label, Recipe, ALLOWED_AMOUNTS};

/// Button label message keys, in the same order as `ALLOWED_AMOUNTS`
const AMOUNT_LABEL_KEYS: [&str; 5] = [
    "amount-half",
    "amount-one",
    "amount-one-and-half",
    "amount-two",
    "amount-two-and-half",
];

const MENU_BUTTONS_PER_ROW: usize = 2;

/// Text and optional inline keyboard of one bot reply
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

/// Create the amount picker keyboard: two buttons per row, callback data is
/// the amount itself
pub fn create_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = ALLOWED_AMOUNTS
        .iter()
        .zip(AMOUNT_LABEL_KEYS)
        .map(|(amount, label_key)| InlineKeyboardButton::callback(t(label_key), amount.to_string()))
        .collect();

    let rows: Vec<Vec<InlineKeyboardButton>> = buttons
        .chunks(MENU_BUTTONS_PER_ROW)
        .map(|row| row.to_vec())
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Create the single-button keyboard shown under a recipe
pub fn create_back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        t("back"),
        BACK_CALLBACK,
    )]])
}

/// Format a recipe as a user-facing sentence
pub fn format_recipe(recipe: &Recipe) -> String {
    let rice = recipe.rice.to_string();
    let water = recipe.water.to_string();
    t_args("recipe-result", &[("rice", rice.as_str()), ("water", water.as_str())])
}

/// Format the message shown for a rejected selection
pub fn format_invalid_selection() -> String {
    let allowed = allowed_amounts_label();
    let reason = t_args("error-invalid-selection", &[("allowed", allowed.as_str())]);
    t_args("error-prefix", &[("message", reason.as_str())])
}

/// Render a dialogue state into the reply that displays it
pub fn render_state(state: &RiceDialogueState) -> BotReply {
    match state {
        RiceDialogueState::Menu => BotReply {
            text: t("menu-prompt"),
            keyboard: Some(create_menu_keyboard()),
        },
        RiceDialogueState::Result { recipe } => BotReply {
            text: format_recipe(recipe),
            keyboard: Some(create_back_keyboard()),
        },
        RiceDialogueState::Error { .. } => BotReply {
            text: format_invalid_selection(),
            keyboard: None,
        },
    }
}

/// Reply for a menu request
pub fn menu_reply() -> BotReply {
    render_state(&RiceDialogueState::Menu)
}

/// Reply for a pressed inline button
pub fn callback_reply(data: &str) -> BotReply {
    render_state(&RiceDialogueState::from_callback(data))
}
