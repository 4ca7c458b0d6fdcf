//! # Recipe Module
//!
//! Validation of the user's rice selection and derivation of the matching
//! amount of water.

use serde::{Deserialize, Serialize};

use crate::errors::BotError;

/// Rice amounts (in cups) the bot accepts, in menu order
pub const ALLOWED_AMOUNTS: [f64; 5] = [0.5, 1.0, 1.5, 2.0, 2.5];

/// Cups of water per cup of rice
pub const WATER_RATIO: f64 = 1.5;

/// A rice/water pair derived from a validated selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub rice: f64,
    pub water: f64,
}

impl Recipe {
    /// Derive the water amount for an already validated rice amount
    pub fn from_rice(rice: f64) -> Self {
        Self {
            rice,
            water: rice * WATER_RATIO,
        }
    }
}

/// Accept `value` only if it is exactly one of [`ALLOWED_AMOUNTS`]
pub fn validate_rice_amount(value: f64) -> Result<f64, BotError> {
    if ALLOWED_AMOUNTS.contains(&value) {
        Ok(value)
    } else {
        Err(BotError::invalid_selection(value.to_string()))
    }
}

/// Parse a callback token such as `"1.5"` and validate it
///
/// Surrounding whitespace is ignored and any float spelling is accepted,
/// so `"1.0"` selects the same amount as `"1"`.
pub fn parse_selection(token: &str) -> Result<f64, BotError> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| BotError::invalid_selection(token))?;

    validate_rice_amount(value).map_err(|_| BotError::invalid_selection(token))
}

/// Allowed amounts joined for display, e.g. `0.5, 1, 1.5, 2, 2.5`
pub fn allowed_amounts_label() -> String {
    ALLOWED_AMOUNTS
        .iter()
        .map(|amount| amount.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_every_allowed_amount() {
        for amount in ALLOWED_AMOUNTS {
            assert_eq!(validate_rice_amount(amount), Ok(amount));
        }
    }

    #[test]
    fn test_validate_rejects_out_of_set() {
        assert!(validate_rice_amount(0.0).is_err());
        assert!(validate_rice_amount(3.0).is_err());
        assert!(validate_rice_amount(0.75).is_err());
        assert!(validate_rice_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_selection_keeps_original_token_in_error() {
        let err = parse_selection("abc").unwrap_err();
        assert_eq!(err, BotError::invalid_selection("abc"));
    }

    #[test]
    fn test_parse_selection_accepts_float_spelling() {
        assert_eq!(parse_selection("1.0"), Ok(1.0));
        assert_eq!(parse_selection(" 2.5 "), Ok(2.5));
    }

    #[test]
    fn test_allowed_amounts_label() {
        assert_eq!(allowed_amounts_label(), "0.5, 1, 1.5, 2, 2.5");
    }
}
