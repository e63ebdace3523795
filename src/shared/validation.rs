use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::locale::LocalizedText;

const PRICE_SCALE: u32 = 2;
const MAX_PRICE_EXCLUSIVE: i64 = 10_000_000_000;

lazy_static! {
    /// Regex for validating category slugs
    /// Must be lowercase alphanumeric with single hyphens between segments
    /// - Valid: "romans", "cafe-litterature", "top-100"
    /// - Invalid: "-romans", "romans-", "romans--policiers", "Romans", "romans_policiers"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Every language variant must be non-blank
pub fn validate_localized_required(text: &LocalizedText) -> Result<(), ValidationError> {
    let missing = text.missing();
    if missing.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = missing.iter().map(|l| l.code()).collect();
    let mut error = ValidationError::new("localized_required");
    error.message = Some(format!("missing text for: {}", codes.join(", ")).into());
    Err(error)
}

/// Prices are stored as `NUMERIC(12, 2)`: non-negative, at most two
/// decimal places and below 10^10.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let (code, message) = if price.is_sign_negative() && !price.is_zero() {
        ("price_negative", "price must not be negative")
    } else if price.normalize().scale() > PRICE_SCALE {
        ("price_precision", "price must have at most 2 decimal places")
    } else if *price >= Decimal::from(MAX_PRICE_EXCLUSIVE) {
        ("price_too_large", "price must be lower than 10000000000")
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("romans"));
        assert!(SLUG_REGEX.is_match("cafe-litterature"));
        assert!(SLUG_REGEX.is_match("top-100"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-romans")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("romans-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("romans--policiers")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Romans")); // uppercase
        assert!(!SLUG_REGEX.is_match("romans_policiers")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("café")); // non-ascii
    }

    #[test]
    fn test_localized_required() {
        assert!(validate_localized_required(&LocalizedText::new("a", "b", "ج")).is_ok());
        let err = validate_localized_required(&LocalizedText::new("a", " ", "")).unwrap_err();
        assert_eq!(err.message.unwrap(), "missing text for: en, ar");
    }

    #[test]
    fn test_price() {
        assert!(validate_price(&Decimal::ZERO).is_ok());
        assert!(validate_price(&Decimal::new(1999, 2)).is_ok());
        assert!(validate_price(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_price_matches_column_precision() {
        // trailing zeros are not extra precision
        assert!(validate_price(&Decimal::new(19990, 3)).is_ok());
        let err = validate_price(&Decimal::new(19999, 3)).unwrap_err();
        assert_eq!(err.code, "price_precision");
    }

    #[test]
    fn test_price_upper_bound() {
        assert!(validate_price(&Decimal::new(999_999_999_999, 2)).is_ok());
        let err = validate_price(&Decimal::new(10_000_000_000, 0)).unwrap_err();
        assert_eq!(err.code, "price_too_large");
    }
}
