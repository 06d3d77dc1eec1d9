//! # Tax Engine
//!
//! The GST computation engine: given a price, a rate, a mode and an optional
//! profit ratio, produces the full breakdown the calculator form displays.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       GST Breakdown Flow                                │
//! │                                                                         │
//! │  EXCLUSIVE (price entered before tax)                                  │
//! │  pre_tax_price = amount                                                │
//! │  profit_amount = pre_tax_price × profit_ratio                          │
//! │  taxable_value = pre_tax_price + profit_amount                         │
//! │  tax_amount    = taxable_value × rate                                  │
//! │  post_tax_price= taxable_value + tax_amount                            │
//! │                                                                         │
//! │  INCLUSIVE (price entered after tax)                                   │
//! │  post_tax_price= amount                                                │
//! │  pre_tax_price = post_tax_price × 100 / (100 + rate)                   │
//! │  profit_amount = pre_tax_price × profit_ratio                          │
//! │  taxable_value = pre_tax_price + profit_amount                         │
//! │  tax_amount    = post_tax_price − taxable_value                        │
//! │                                                                         │
//! │  Either way: half_tax_amount = tax_amount / 2 (CGST = SGST, exactly)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here. Results carry full precision until the
//! presentation layer wraps them in [`crate::types::Rupees`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Percent, TaxMode};

// =============================================================================
// Request
// =============================================================================

/// A validated GST computation request.
///
/// ## Design Notes
/// The request is an explicit immutable value rather than running totals in
/// widget state, so the engine has no hidden state at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxComputationRequest {
    /// The price the user entered. Pre-tax in exclusive mode, post-tax in
    /// inclusive mode.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// Whether `amount` excludes or includes tax.
    pub mode: TaxMode,
    /// GST rate.
    pub tax_rate: Percent,
    /// Optional profit markup applied to the pre-tax price.
    pub profit_ratio: Percent,
}

impl TaxComputationRequest {
    /// Creates a request, rejecting negative amounts.
    pub fn new(
        amount: Decimal,
        mode: TaxMode,
        tax_rate: Percent,
        profit_ratio: Percent,
    ) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::MustBeNonNegative {
                field: "amount".to_string(),
            });
        }
        Ok(TaxComputationRequest {
            amount,
            mode,
            tax_rate,
            profit_ratio,
        })
    }

    /// Runs the engine for this request.
    pub fn compute(&self) -> Result<TaxBreakdown, ValidationError> {
        match self.mode {
            TaxMode::Exclusive => compute_exclusive(self.amount, self.tax_rate, self.profit_ratio),
            TaxMode::Inclusive => compute_inclusive(self.amount, self.tax_rate, self.profit_ratio),
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// The full GST breakdown for one request.
///
/// ## Invariants
/// - `taxable_value = pre_tax_price + profit_amount`
/// - `post_tax_price = taxable_value + tax_amount`
/// - `half_tax_amount = tax_amount / 2` - the CGST/SGST split is always an
///   exact halving of the total tax
///
/// Produced fresh per request; never mutated, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxBreakdown {
    #[ts(as = "String")]
    pub pre_tax_price: Decimal,
    #[ts(as = "String")]
    pub profit_amount: Decimal,
    #[ts(as = "String")]
    pub taxable_value: Decimal,
    #[ts(as = "String")]
    pub post_tax_price: Decimal,
    #[ts(as = "String")]
    pub tax_amount: Decimal,
    /// Half of `tax_amount`; the CGST amount and equally the SGST amount.
    #[ts(as = "String")]
    pub half_tax_amount: Decimal,
}

impl TaxBreakdown {
    /// The ordered rows of the "Full Breakup" view.
    ///
    /// Labels match the calculator form so the presentation layer can show
    /// them verbatim.
    pub fn breakup(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("Pre-GST Price", self.pre_tax_price),
            ("Profit Amount", self.profit_amount),
            ("Taxable Value", self.taxable_value),
            ("GST Amount", self.tax_amount),
            ("CGST Amount", self.half_tax_amount),
            ("SGST Amount", self.half_tax_amount),
            ("Post-GST Price", self.post_tax_price),
        ]
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Computes the breakdown for a pre-tax price (exclusive mode).
///
/// `amount` must be non-negative; the rate and profit ratio are already
/// range-checked by [`Percent`].
pub fn compute_exclusive(
    amount: Decimal,
    tax_rate: Percent,
    profit_ratio: Percent,
) -> Result<TaxBreakdown, ValidationError> {
    require_non_negative("amount", amount)?;

    let pre_tax_price = amount;
    let profit_amount = pre_tax_price * profit_ratio.fraction();
    let taxable_value = pre_tax_price + profit_amount;
    let tax_amount = taxable_value * tax_rate.fraction();
    let post_tax_price = taxable_value + tax_amount;

    Ok(TaxBreakdown {
        pre_tax_price,
        profit_amount,
        taxable_value,
        post_tax_price,
        tax_amount,
        half_tax_amount: tax_amount / Decimal::TWO,
    })
}

/// Computes the breakdown for a post-tax price (inclusive mode).
///
/// ## Known Asymmetry
/// "Inclusive" means inclusive-of-tax-only, not inclusive-of-profit. With
/// `tax_rate = 0` and a nonzero profit ratio, `pre_tax_price` equals
/// `post_tax_price` and `tax_amount` comes out negative (`-profit_amount`).
/// Callers must surface this rather than clamp it.
pub fn compute_inclusive(
    post_tax_amount: Decimal,
    tax_rate: Percent,
    profit_ratio: Percent,
) -> Result<TaxBreakdown, ValidationError> {
    require_non_negative("amount", post_tax_amount)?;

    let post_tax_price = post_tax_amount;
    let pre_tax_price =
        post_tax_price * Decimal::ONE_HUNDRED / (Decimal::ONE_HUNDRED + tax_rate.value());
    let profit_amount = pre_tax_price * profit_ratio.fraction();
    let taxable_value = pre_tax_price + profit_amount;
    let tax_amount = post_tax_price - taxable_value;

    Ok(TaxBreakdown {
        pre_tax_price,
        profit_amount,
        taxable_value,
        post_tax_price,
        tax_amount,
        half_tax_amount: tax_amount / Decimal::TWO,
    })
}

fn require_non_negative(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pct(v: Decimal) -> Percent {
        Percent::new(v).unwrap()
    }

    #[test]
    fn test_exclusive_basic() {
        // ₹1000 at 18%, no profit
        let b = compute_exclusive(dec!(1000), pct(dec!(18)), Percent::zero()).unwrap();
        assert_eq!(b.pre_tax_price, dec!(1000));
        assert_eq!(b.profit_amount, dec!(0));
        assert_eq!(b.taxable_value, dec!(1000));
        assert_eq!(b.tax_amount, dec!(180));
        assert_eq!(b.post_tax_price, dec!(1180));
        assert_eq!(b.half_tax_amount, dec!(90));
    }

    #[test]
    fn test_exclusive_with_profit() {
        // ₹1000 at 18% with 10% markup
        let b = compute_exclusive(dec!(1000), pct(dec!(18)), pct(dec!(10))).unwrap();
        assert_eq!(b.profit_amount, dec!(100));
        assert_eq!(b.taxable_value, dec!(1100));
        assert_eq!(b.tax_amount, dec!(198));
        assert_eq!(b.post_tax_price, dec!(1298));
    }

    #[test]
    fn test_inclusive_basic() {
        // ₹1180 at 18% backs out to ₹1000
        let b = compute_inclusive(dec!(1180), pct(dec!(18)), Percent::zero()).unwrap();
        assert_eq!(b.post_tax_price, dec!(1180));
        assert_eq!(b.pre_tax_price.round_dp(10), dec!(1000));
        assert_eq!(b.tax_amount.round_dp(10), dec!(180));
    }

    #[test]
    fn test_inclusive_zero_rate_nonzero_profit_is_negative_tax() {
        // Documented asymmetry: inclusive-of-tax-only
        let b = compute_inclusive(dec!(500), Percent::zero(), pct(dec!(10))).unwrap();
        assert_eq!(b.pre_tax_price, dec!(500));
        assert_eq!(b.profit_amount, dec!(50));
        assert_eq!(b.tax_amount, dec!(-50));
    }

    #[test]
    fn test_breakdown_invariants() {
        let b = compute_exclusive(dec!(437.21), pct(dec!(12)), pct(dec!(7.5))).unwrap();
        assert_eq!(b.taxable_value, b.pre_tax_price + b.profit_amount);
        assert_eq!(b.post_tax_price, b.taxable_value + b.tax_amount);
        assert_eq!(b.half_tax_amount * Decimal::TWO, b.tax_amount);
    }

    #[test]
    fn test_round_trip() {
        let b = compute_exclusive(dec!(250), pct(dec!(28)), Percent::zero()).unwrap();
        let back = compute_inclusive(b.post_tax_price, pct(dec!(28)), Percent::zero()).unwrap();
        assert_eq!(back.pre_tax_price.round_dp(10), dec!(250));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = compute_exclusive(dec!(-1), Percent::zero(), Percent::zero()).unwrap_err();
        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));
    }

    #[test]
    fn test_request_dispatches_by_mode() {
        let req = TaxComputationRequest::new(
            dec!(1180),
            TaxMode::Inclusive,
            pct(dec!(18)),
            Percent::zero(),
        )
        .unwrap();
        let b = req.compute().unwrap();
        assert_eq!(b.post_tax_price, dec!(1180));

        assert!(TaxComputationRequest::new(
            dec!(-5),
            TaxMode::Exclusive,
            Percent::zero(),
            Percent::zero()
        )
        .is_err());
    }

    #[test]
    fn test_breakup_rows_in_form_order() {
        let b = compute_exclusive(dec!(100), pct(dec!(18)), Percent::zero()).unwrap();
        let rows = b.breakup();
        assert_eq!(rows[0].0, "Pre-GST Price");
        assert_eq!(rows[6].0, "Post-GST Price");
        assert_eq!(rows[4].1, rows[5].1); // CGST == SGST
    }
}
