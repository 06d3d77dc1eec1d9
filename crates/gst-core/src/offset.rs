//! # GST Offset Settlement
//!
//! Offsets input tax credit against output tax liability across the three
//! GST heads and reports what remains.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GST Offset Settlement                              │
//! │                                                                         │
//! │   GST HEAD   INPUT (GSTR-1)   OUTPUT (GSTR-3B)                         │
//! │   IGST          x₁                y₁                                   │
//! │   CGST          x₂                y₂                                   │
//! │   SGST          x₃                y₃                                   │
//! │                                                                         │
//! │   net = Σy − Σx                                                        │
//! │   net > 0  ──► Payable(net)              (tax due this period)         │
//! │   net < 0  ──► CreditCarriedForward(−net) (ITC left over)              │
//! │   net = 0  ──► Settled                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Head Amounts
// =============================================================================

/// Amounts filed per GST head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeadAmounts {
    #[ts(as = "String")]
    pub igst: Decimal,
    #[ts(as = "String")]
    pub cgst: Decimal,
    #[ts(as = "String")]
    pub sgst: Decimal,
}

impl HeadAmounts {
    /// Creates head amounts, rejecting negative entries.
    pub fn new(igst: Decimal, cgst: Decimal, sgst: Decimal) -> Result<Self, ValidationError> {
        for (field, value) in [("IGST", igst), ("CGST", cgst), ("SGST", sgst)] {
            if value < Decimal::ZERO {
                return Err(ValidationError::MustBeNonNegative {
                    field: field.to_string(),
                });
            }
        }
        Ok(HeadAmounts { igst, cgst, sgst })
    }

    /// Sum across the three heads.
    #[inline]
    pub fn total(&self) -> Decimal {
        self.igst + self.cgst + self.sgst
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// One filing period's input credit and output liability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstLedger {
    /// Input tax credit, as per GSTR-1.
    pub input: HeadAmounts,
    /// Output tax liability, as per GSTR-3B.
    pub output: HeadAmounts,
}

// =============================================================================
// Outcome
// =============================================================================

/// The settlement outcome for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum OffsetOutcome {
    /// Output liability exceeds input credit; this much tax is due.
    Payable(#[ts(as = "String")] Decimal),
    /// Input credit exceeds output liability; this much carries forward.
    CreditCarriedForward(#[ts(as = "String")] Decimal),
    /// Credit and liability cancel exactly.
    Settled,
}

// =============================================================================
// Operation
// =============================================================================

/// Settles a period's ledger: total output liability minus total input credit.
pub fn settle(ledger: &GstLedger) -> OffsetOutcome {
    let net = ledger.output.total() - ledger.input.total();
    if net > Decimal::ZERO {
        OffsetOutcome::Payable(net)
    } else if net < Decimal::ZERO {
        OffsetOutcome::CreditCarriedForward(-net)
    } else {
        OffsetOutcome::Settled
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
    fn test_payable_when_output_exceeds_input() {
        let ledger = GstLedger {
            input: HeadAmounts::new(dec!(100), dec!(200), dec!(200)).unwrap(),
            output: HeadAmounts::new(dec!(300), dec!(300), dec!(150)).unwrap(),
        };
        assert_eq!(settle(&ledger), OffsetOutcome::Payable(dec!(250)));
    }

    #[test]
    fn test_credit_carried_forward_when_input_exceeds_output() {
        let ledger = GstLedger {
            input: HeadAmounts::new(dec!(500), dec!(0), dec!(0)).unwrap(),
            output: HeadAmounts::new(dec!(100), dec!(100), dec!(100)).unwrap(),
        };
        assert_eq!(
            settle(&ledger),
            OffsetOutcome::CreditCarriedForward(dec!(200))
        );
    }

    #[test]
    fn test_settled_at_equality() {
        let amounts = HeadAmounts::new(dec!(10), dec!(20), dec!(30)).unwrap();
        let ledger = GstLedger {
            input: amounts,
            output: amounts,
        };
        assert_eq!(settle(&ledger), OffsetOutcome::Settled);
    }

    #[test]
    fn test_negative_head_amount_rejected() {
        assert!(HeadAmounts::new(dec!(-1), dec!(0), dec!(0)).is_err());
    }

    #[test]
    fn test_head_total() {
        let amounts = HeadAmounts::new(dec!(1.5), dec!(2.5), dec!(3)).unwrap();
        assert_eq!(amounts.total(), dec!(7));
    }
}
