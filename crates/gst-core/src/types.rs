//! # Shared Value Types
//!
//! Core value types used throughout the GST toolkit.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Value Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Percent      │   │    TaxMode      │   │    GstHead      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Decimal 0-100  │   │  Exclusive      │   │  Igst           │       │
//! │  │  18 = 18%       │   │  Inclusive      │   │  Cgst           │       │
//! │  │  fraction()=0.18│   └─────────────────┘   │  Sgst           │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌───────────┐       │
//! │  │  BusinessType   │   │  RegistrationStatus  │   │  Rupees   │       │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ───────  │       │
//! │  │  Goods          │   │  RegisteredRegular   │   │  Display  │       │
//! │  │  Services       │   │  RegisteredComposition│  │  ₹ x.xx   │       │
//! │  │  Both           │   │  NotRegistered       │   └───────────┘       │
//! │  └─────────────────┘   └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Percent-as-number Rule
//! Percentages are plain numbers internally (18, not "18%"). The "%" suffix
//! exists only at the presentation boundary; see
//! [`crate::validation::parse_percent_field`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Percent
// =============================================================================

/// A percentage in the range 0-100 inclusive.
///
/// ## Why a newtype?
/// Tax rates and profit ratios arrive as user input. Validating once at
/// construction means every formula downstream can trust the range and
/// convert to a 0-1 fraction without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(#[ts(as = "String")] Decimal);

impl Percent {
    /// Creates a percent, rejecting values outside 0-100.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: "0".to_string(),
                max: "100".to_string(),
            });
        }
        Ok(Percent(value))
    }

    /// The percentage as entered (18 for 18%).
    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The percentage as a 0-1 multiplier (0.18 for 18%).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Half the rate. Used for the CGST/SGST rate split.
    #[inline]
    pub fn half(&self) -> Percent {
        Percent(self.0 / Decimal::TWO)
    }

    /// Zero percent.
    #[inline]
    pub fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    /// Constructs a percent from a value already known to be in range.
    /// For crate-internal policy constants only.
    #[inline]
    pub(crate) fn unchecked(value: Decimal) -> Self {
        debug_assert!(value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED);
        Percent(value)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Tax Mode
// =============================================================================

/// Whether the entered amount excludes or includes tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Entered price is pre-tax; tax is added on top.
    Exclusive,
    /// Entered price already includes tax; tax is backed out.
    Inclusive,
}

impl Default for TaxMode {
    fn default() -> Self {
        TaxMode::Exclusive
    }
}

// =============================================================================
// GST Head
// =============================================================================

/// The three GST heads a taxpayer files under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GstHead {
    /// Integrated GST (interstate supplies).
    Igst,
    /// Central GST.
    Cgst,
    /// State GST.
    Sgst,
}

// =============================================================================
// Business Type
// =============================================================================

/// The nature of a business, as declared for the composition scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// Deals in goods only.
    Goods,
    /// Deals in services only.
    Services,
    /// Deals in both goods and services.
    Both,
}

// =============================================================================
// Registration Status
// =============================================================================

/// GST registration status of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Registered under the regular scheme.
    RegisteredRegular,
    /// Already registered under the composition scheme.
    RegisteredComposition,
    /// Not registered at all.
    NotRegistered,
}

// =============================================================================
// Rupees (display wrapper)
// =============================================================================

/// Display wrapper that renders an amount as `₹ 1234.56`.
///
/// ## The ONLY rounding point
/// Engine results carry full precision. Wrapping a value in `Rupees` rounds
/// to two decimal places for display; nothing upstream ever rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rupees(pub Decimal);

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹ {:.2}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_range() {
        assert!(Percent::new(dec!(0)).is_ok());
        assert!(Percent::new(dec!(18)).is_ok());
        assert!(Percent::new(dec!(100)).is_ok());

        assert!(Percent::new(dec!(-1)).is_err());
        assert!(Percent::new(dec!(100.01)).is_err());
    }

    #[test]
    fn test_percent_fraction() {
        let rate = Percent::new(dec!(18)).unwrap();
        assert_eq!(rate.fraction(), dec!(0.18));
        assert_eq!(rate.value(), dec!(18));
    }

    #[test]
    fn test_percent_half() {
        let rate = Percent::new(dec!(18)).unwrap();
        assert_eq!(rate.half().value(), dec!(9));

        let odd = Percent::new(dec!(5)).unwrap();
        assert_eq!(odd.half().value(), dec!(2.5));
    }

    #[test]
    fn test_tax_mode_default() {
        assert_eq!(TaxMode::default(), TaxMode::Exclusive);
    }

    #[test]
    fn test_rupees_display() {
        assert_eq!(format!("{}", Rupees(dec!(1234.5))), "₹ 1234.50");
        assert_eq!(format!("{}", Rupees(dec!(0))), "₹ 0.00");
        assert_eq!(format!("{}", Rupees(dec!(99.999))), "₹ 100.00");
    }

    #[test]
    fn test_enum_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaxMode::Inclusive).unwrap(),
            "\"inclusive\""
        );
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::RegisteredRegular).unwrap(),
            "\"registered_regular\""
        );
        assert_eq!(serde_json::to_string(&GstHead::Igst).unwrap(), "\"igst\"");
    }
}
