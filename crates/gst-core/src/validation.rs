//! # Validation Module
//!
//! Boundary parsing of raw form fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (out of scope)                                          │
//! │  ├── Gathers raw field strings from entry widgets                      │
//! │  └── Immediate user feedback on empty fields                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parse string → Decimal / Percent                                  │
//! │  └── Range checks, errors name the offending field                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Request constructors (tax, customs, composition)             │
//! │  └── Domain-rule checks on already-numeric values                      │
//! │                                                                         │
//! │  No computation runs until every field has parsed cleanly.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::validation::{parse_amount_field, parse_percent_field};
//!
//! let amount = parse_amount_field("value of goods", " 1250.50 ").unwrap();
//! // The "%" suffix is a presentation convention; both forms parse.
//! let rate = parse_percent_field("GST rate", "18%").unwrap();
//! assert_eq!(rate, parse_percent_field("GST rate", "18").unwrap());
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::Percent;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Fields
// =============================================================================

/// Parses a monetary field into a non-negative `Decimal`.
///
/// ## Rules
/// - Trimmed input must not be empty
/// - Must parse as a decimal number
/// - Must not be negative
///
/// The returned error always names `field` so the form can highlight it.
pub fn parse_amount_field(field: &str, raw: &str) -> ValidationResult<Decimal> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value = Decimal::from_str(raw).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a number".to_string(),
    })?;

    if value < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Percent Fields
// =============================================================================

/// Parses a percentage field into a [`Percent`].
///
/// ## Rules
/// - Trimmed input must not be empty
/// - A single trailing `%` is tolerated ("18%" and "18" are equivalent);
///   the suffix is a presentation convention and never survives parsing
/// - Value must be within 0-100
pub fn parse_percent_field(field: &str, raw: &str) -> ValidationResult<Percent> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let digits = raw.strip_suffix('%').unwrap_or(raw).trim();
    let value = Decimal::from_str(digits).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a percentage".to_string(),
    })?;

    Percent::new(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: "0".to_string(),
        max: "100".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount_field("amount", "1250.50").unwrap(), dec!(1250.50));
        assert_eq!(parse_amount_field("amount", "  0  ").unwrap(), dec!(0));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(matches!(
            parse_amount_field("amount", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount_field("amount", "twelve"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_amount_field("amount", "-5"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_error_names_the_field() {
        let err = parse_amount_field("shipping cost", "abc").unwrap_err();
        assert!(err.to_string().contains("shipping cost"));
    }

    #[test]
    fn test_parse_percent_with_and_without_suffix() {
        let with = parse_percent_field("GST rate", "18%").unwrap();
        let without = parse_percent_field("GST rate", "18").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.value(), dec!(18));
    }

    #[test]
    fn test_parse_percent_fractional() {
        let rate = parse_percent_field("BCD rate", "7.5%").unwrap();
        assert_eq!(rate.fraction(), dec!(0.075));
    }

    #[test]
    fn test_parse_percent_rejects_out_of_range() {
        assert!(matches!(
            parse_percent_field("rate", "101"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_percent_field("rate", "-1%"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_percent_rejects_garbage() {
        assert!(matches!(
            parse_percent_field("rate", "%"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_percent_field("rate", "abc%"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
