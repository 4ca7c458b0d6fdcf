use anyhow::Result;

use rice_bot::dialogue::{RiceDialogueState, BACK_CALLBACK};
use rice_bot::recipe::Recipe;

/// Test dialogue states can be serialized/deserialized with serde_json
#[tokio::test]
async fn test_dialogue_state_serialization() -> Result<()> {
    let state = RiceDialogueState::Result {
        recipe: Recipe::from_rice(1.5),
    };

    let json = serde_json::to_string(&state)?;
    let restored: RiceDialogueState = serde_json::from_str(&json)?;
    assert_eq!(restored, state);

    Ok(())
}

/// Test default state
#[test]
fn test_default_state_is_menu() {
    assert_eq!(RiceDialogueState::default(), RiceDialogueState::Menu);
}

/// Menu -> Result -> back -> Menu
#[test]
fn test_selection_then_back_loop() {
    let result = RiceDialogueState::from_callback("1");
    assert_eq!(
        result,
        RiceDialogueState::Result {
            recipe: Recipe {
                rice: 1.0,
                water: 1.5
            }
        }
    );

    let back = RiceDialogueState::from_callback(BACK_CALLBACK);
    assert_eq!(back, RiceDialogueState::Menu);
}

/// Latest selection wins: each callback is evaluated on its own
#[test]
fn test_each_callback_is_independent() {
    let first = RiceDialogueState::from_callback("0.5");
    let second = RiceDialogueState::from_callback("2");

    assert!(matches!(first, RiceDialogueState::Result { recipe } if recipe.water == 0.75));
    assert!(matches!(second, RiceDialogueState::Result { recipe } if recipe.water == 3.0));
}

#[test]
fn test_invalid_tokens_lead_to_error_state() {
    for token in ["0", "3", "abc", "", "Back"] {
        assert!(
            matches!(
                RiceDialogueState::from_callback(token),
                RiceDialogueState::Error { .. }
            ),
            "token {:?} should be rejected",
            token
        );
    }
}
