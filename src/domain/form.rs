//! Parsing of the free-text form fields before they reach the calculator.

use thiserror::Error;

use super::calculator::LoadItem;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter a value")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("value is out of range")]
    NotFinite,
    #[error("power cannot be negative")]
    Negative,
}

/// Parses a numeric field. Rejected text never reaches the calculator, so the
/// last valid value stays in effect while the field is marked invalid.
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite);
    }
    Ok(value)
}

/// Like [`parse_number`] but rejects negative values.
pub fn parse_power(text: &str) -> Result<f64, InputError> {
    let value = parse_number(text)?;
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Text shown in a numeric field for a stored value.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// The "add new item" row of the shiftable load list.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLoadDraft {
    pub label: String,
    pub power_text: String,
}

impl Default for NewLoadDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            power_text: "0".to_string(),
        }
    }
}

impl NewLoadDraft {
    pub fn to_item(&self) -> Result<LoadItem, InputError> {
        let power = parse_power(&self.power_text)?;
        Ok(LoadItem::new(self.label.trim(), power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_number("12.5"), Ok(12.5));
        assert_eq!(parse_number("  -3 "), Ok(-3.0));
        assert_eq!(parse_number("0"), Ok(0.0));
    }

    #[test]
    fn rejects_bad_text() {
        assert_eq!(parse_number(""), Err(InputError::Empty));
        assert_eq!(parse_number("   "), Err(InputError::Empty));
        assert_eq!(
            parse_number("12p"),
            Err(InputError::NotANumber("12p".into()))
        );
        assert_eq!(parse_number("NaN"), Err(InputError::NotFinite));
        assert_eq!(parse_number("inf"), Err(InputError::NotFinite));
    }

    #[test]
    fn negative_prices_allowed_but_not_power() {
        assert_eq!(parse_number("-5"), Ok(-5.0));
        assert_eq!(parse_power("-5"), Err(InputError::Negative));
        assert_eq!(parse_power("2.4"), Ok(2.4));
    }

    #[test]
    fn draft_builds_an_enabled_item() {
        let draft = NewLoadDraft {
            label: " EV charger ".into(),
            power_text: "7.4".into(),
        };
        assert_eq!(draft.to_item(), Ok(LoadItem::new("EV charger", 7.4)));

        let bad = NewLoadDraft {
            label: "Kettle".into(),
            power_text: "lots".into(),
        };
        assert!(bad.to_item().is_err());
    }

    #[test]
    fn formatted_numbers_parse_back() {
        for value in [0.3, 12.0, -1.25] {
            assert_eq!(parse_number(&format_number(value)), Ok(value));
        }
    }
}
