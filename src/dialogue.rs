//! Screen state of the rice dialogue.

use serde::{Deserialize, Serialize};

use crate::recipe::{parse_selection, Recipe};

/// Callback data of the "back" button
pub const BACK_CALLBACK: &str = "back";

/// Represents which screen the user is looking at
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RiceDialogueState {
    /// Amount picker
    #[default]
    Menu,
    /// Computed recipe with a way back to the menu
    Result { recipe: Recipe },
    /// Rejected selection; no way back is offered
    Error { input: String },
}

impl RiceDialogueState {
    /// Compute the next screen from an inline button's callback data
    pub fn from_callback(data: &str) -> Self {
        if data == BACK_CALLBACK {
            return RiceDialogueState::Menu;
        }

        match parse_selection(data) {
            Ok(rice) => RiceDialogueState::Result {
                recipe: Recipe::from_rice(rice),
            },
            Err(_) => RiceDialogueState::Error {
                input: data.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_returns_to_menu() {
        assert_eq!(RiceDialogueState::from_callback("back"), RiceDialogueState::Menu);
    }

    #[test]
    fn test_selection_produces_recipe() {
        match RiceDialogueState::from_callback("2") {
            RiceDialogueState::Result { recipe } => {
                assert_eq!(recipe.rice, 2.0);
                assert_eq!(recipe.water, 3.0);
            }
            other => panic!("Unexpected dialogue state: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_selection_produces_error() {
        assert_eq!(
            RiceDialogueState::from_callback("3"),
            RiceDialogueState::Error {
                input: "3".to_string()
            }
        );
    }
}
