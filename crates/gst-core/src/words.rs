//! # Amount in Words
//!
//! Renders a rupee amount as English words using the Indian numbering
//! system, for the "Total Invoice Value (In Words)" line.
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Indian Numbering Grouping                            │
//! │                                                                         │
//! │   12,34,56,789.01                                                      │
//! │   ──┬ ─┬ ─┬ ─┬─ ─┬                                                     │
//! │     │  │  │  │   └── paise (0-99, "and ... Paise")                     │
//! │     │  │  │  └───── hundreds group (0-999)                             │
//! │     │  │  └──────── thousand group (0-99)                              │
//! │     │  └─────────── lakh group (0-99)          lakh  = 10^5            │
//! │     └────────────── crore group (0-999)        crore = 10^7            │
//! │                                                                         │
//! │   "Twelve Crore Thirty Four Lakh Fifty Six Thousand                    │
//! │    Seven Hundred Eighty Nine Rupees and One Paise"                     │
//! │                                                                         │
//! │   Zero groups contribute nothing - never "Zero Crore".                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output is deterministic, pure-ASCII English. The supported range is
//! 0 to ₹9,99,99,99,999 (the crore group holds at most three digits).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

use crate::error::ValidationError;

// =============================================================================
// Word Tables
// =============================================================================

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Largest rupee value the crore group can express.
const MAX_RUPEES: u64 = 9_999_999_999;

// =============================================================================
// Operation
// =============================================================================

/// Renders a non-negative rupee amount as English words.
///
/// `rupees = trunc(amount)`, `paise = round((amount - rupees) * 100)`; a
/// paise value that rounds to 100 carries into the rupee part.
///
/// ## Conventions
/// - Exactly zero renders as `"Zero Rupees"` (paise cannot exist at zero).
/// - Zero rupees with nonzero paise renders as
///   `"Zero Rupees and <words> Paise"`: every output keeps the rupee anchor.
///
/// ## Errors
/// - `MustBeNonNegative` for negative amounts
/// - `OutOfRange` for amounts past ₹9,99,99,99,999
pub fn amount_in_words(amount: Decimal) -> Result<String, ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
    }
    if amount.is_zero() {
        return Ok("Zero Rupees".to_string());
    }

    let whole = amount.trunc();
    let fraction = (amount - whole) * Decimal::ONE_HUNDRED;
    let paise_rounded =
        fraction.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let mut rupees = whole.to_u64().ok_or_else(|| out_of_range())?;
    // Rounded paise is in 0..=100 by construction
    let mut paise = paise_rounded.to_u32().unwrap_or(0);
    if paise == 100 {
        rupees += 1;
        paise = 0;
    }
    if rupees > MAX_RUPEES {
        return Err(out_of_range());
    }

    let crore = (rupees / 10_000_000) as u32;
    let lakh = ((rupees / 100_000) % 100) as u32;
    let thousand = ((rupees / 1_000) % 100) as u32;
    let hundreds = (rupees % 1_000) as u32;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        parts.push(format!("{} Crore", below_thousand(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", below_thousand(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", below_thousand(thousand)));
    }
    if hundreds > 0 {
        parts.push(below_thousand(hundreds));
    }
    if parts.is_empty() {
        // Nonzero paise on a zero rupee part keeps the rupee anchor
        parts.push("Zero".to_string());
    }
    parts.push("Rupees".to_string());

    let mut result = parts.join(" ");
    if paise > 0 {
        result.push_str(&format!(" and {} Paise", below_hundred(paise)));
    }

    Ok(result)
}

// =============================================================================
// Group Converters
// =============================================================================

/// Words for 1-999: "<d> Hundred <remainder>" with the remainder optional.
fn below_thousand(n: u32) -> String {
    debug_assert!((1..1000).contains(&n));
    if n < 100 {
        return below_hundred(n);
    }
    let hundreds_word = format!("{} Hundred", ONES[(n / 100) as usize]);
    match n % 100 {
        0 => hundreds_word,
        rest => format!("{} {}", hundreds_word, below_hundred(rest)),
    }
}

/// Words for 1-99 via the ones/teens/tens tables.
fn below_hundred(n: u32) -> String {
    debug_assert!((1..100).contains(&n));
    match n {
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => match n % 10 {
            0 => TENS[(n / 10) as usize].to_string(),
            unit => format!("{} {}", TENS[(n / 10) as usize], ONES[unit as usize]),
        },
    }
}

fn out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: "0".to_string(),
        max: MAX_RUPEES.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn words(amount: Decimal) -> String {
        amount_in_words(amount).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(words(dec!(0)), "Zero Rupees");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(words(dec!(100)), "One Hundred Rupees");
        assert_eq!(words(dec!(100000)), "One Lakh Rupees");
        assert_eq!(words(dec!(10000000)), "One Crore Rupees");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words(dec!(1)), "One Rupees");
        assert_eq!(words(dec!(13)), "Thirteen Rupees");
        assert_eq!(words(dec!(40)), "Forty Rupees");
        assert_eq!(words(dec!(99)), "Ninety Nine Rupees");
        assert_eq!(words(dec!(115)), "One Hundred Fifteen Rupees");
        assert_eq!(words(dec!(500)), "Five Hundred Rupees");
    }

    #[test]
    fn test_full_grouping() {
        assert_eq!(
            words(dec!(1234567.89)),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and Eighty Nine Paise"
        );
        assert_eq!(
            words(dec!(123456789)),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine Rupees"
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        // No "Zero Lakh" / "Zero Thousand" between crore and hundreds
        assert_eq!(words(dec!(10000005)), "One Crore Five Rupees");
        assert_eq!(words(dec!(200300)), "Two Lakh Three Hundred Rupees");
    }

    #[test]
    fn test_zero_rupees_nonzero_paise_keeps_rupee_anchor() {
        assert_eq!(words(dec!(0.50)), "Zero Rupees and Fifty Paise");
        assert_eq!(words(dec!(0.01)), "Zero Rupees and One Paise");
    }

    #[test]
    fn test_paise_rounding_and_carry() {
        // 0.894 -> 89 paise, 0.895 -> 90 paise
        assert_eq!(words(dec!(5.894)), "Five Rupees and Eighty Nine Paise");
        assert_eq!(words(dec!(5.895)), "Five Rupees and Ninety Paise");
        // 99.9 paise rounds to 100 and carries into the rupee part
        assert_eq!(words(dec!(1.999)), "Two Rupees");
    }

    #[test]
    fn test_max_supported_amount() {
        assert_eq!(
            words(Decimal::from(9_999_999_999u64)),
            "Nine Hundred Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand \
             Nine Hundred Ninety Nine Rupees"
        );
        assert!(amount_in_words(Decimal::from(10_000_000_000u64)).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            amount_in_words(dec!(-0.01)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_output_is_ascii() {
        assert!(words(dec!(98765432.10)).is_ascii());
    }
}
