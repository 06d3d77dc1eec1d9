//! # Customs Duty Engine
//!
//! Import duty breakdown: Basic Customs Duty, IGST and cess over the landed
//! cost of goods.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Customs Duty Breakdown                              │
//! │                                                                         │
//! │  lookup_hs_code(code) ── not whitelisted? ──► UnrecognizedCategory     │
//! │       │                                       (no arithmetic runs)     │
//! │       ▼                                                                 │
//! │  bcd      = value_of_goods × bcd_rate                                  │
//! │  subtotal = value_of_goods + bcd + shipping + insurance                │
//! │  igst     = subtotal × igst_rate                                       │
//! │  cess     = subtotal × cess_rate        (tariff policy, default 3%)    │
//! │  total    = bcd + igst + cess                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Percent;

// =============================================================================
// HS Code Whitelist
// =============================================================================

/// A recognized goods category: human-readable label plus its HS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct HsCategory {
    pub label: &'static str,
    pub code: &'static str,
}

/// The fixed whitelist of recognized goods categories.
///
/// ## Why a constant?
/// The calculator only quotes duty for categories it knows the tariff
/// treatment of. Anything else is rejected up front.
pub const HS_CODE_WHITELIST: [HsCategory; 6] = [
    HsCategory {
        label: "Vehicles",
        code: "8703",
    },
    HsCategory {
        label: "Pharmaceutical Goods",
        code: "3006",
    },
    HsCategory {
        label: "Laptop, Mobile Phones, Desktop and Personal Computers",
        code: "8471",
    },
    HsCategory {
        label: "Printers, Keyboards, USB Devices",
        code: "8528",
    },
    HsCategory {
        label: "Precious Metals",
        code: "7113",
    },
    HsCategory {
        label: "Toy Items",
        code: "9503",
    },
];

/// Looks up an HS code in the whitelist.
///
/// Unrecognized codes fail with [`CoreError::UnrecognizedCategory`] before
/// any duty arithmetic runs.
pub fn lookup_hs_code(code: &str) -> CoreResult<&'static HsCategory> {
    let code = code.trim();
    HS_CODE_WHITELIST
        .iter()
        .find(|category| category.code == code)
        .ok_or_else(|| CoreError::UnrecognizedCategory {
            code: code.to_string(),
        })
}

// =============================================================================
// Tariff Policy
// =============================================================================

/// Tariff policy constants for the customs computation.
///
/// ## Why configurable?
/// The cess rate is a jurisdiction's policy choice that changes over time.
/// The default is the 3% rate the calculator has always used; callers with
/// newer tariff tables can pass their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomsTariff {
    /// Cess levied on the post-BCD-and-logistics subtotal.
    pub cess_rate: Percent,
}

impl Default for CustomsTariff {
    fn default() -> Self {
        CustomsTariff {
            // 3% - the historical fixed cess rate
            cess_rate: Percent::unchecked(Decimal::from(3)),
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// A validated customs duty request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomsRequest {
    /// Goods classification code; must be whitelisted.
    pub hs_code: String,
    #[ts(as = "String")]
    pub value_of_goods: Decimal,
    #[ts(as = "String")]
    pub shipping_cost: Decimal,
    #[ts(as = "String")]
    pub insurance_cost: Decimal,
    /// Basic Customs Duty rate.
    pub bcd_rate: Percent,
    /// IGST rate applied to the landed subtotal.
    pub igst_rate: Percent,
}

impl CustomsRequest {
    /// Creates a request, rejecting negative monetary fields.
    pub fn new(
        hs_code: impl Into<String>,
        value_of_goods: Decimal,
        shipping_cost: Decimal,
        insurance_cost: Decimal,
        bcd_rate: Percent,
        igst_rate: Percent,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("value of goods", value_of_goods),
            ("shipping cost", shipping_cost),
            ("insurance cost", insurance_cost),
        ] {
            if value < Decimal::ZERO {
                return Err(ValidationError::MustBeNonNegative {
                    field: field.to_string(),
                });
            }
        }
        Ok(CustomsRequest {
            hs_code: hs_code.into(),
            value_of_goods,
            shipping_cost,
            insurance_cost,
            bcd_rate,
            igst_rate,
        })
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// The customs duty breakdown for one import.
///
/// ## Invariant
/// `total_duty = basic_customs_duty + integrated_gst + cess`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomsBreakdown {
    #[ts(as = "String")]
    pub basic_customs_duty: Decimal,
    #[ts(as = "String")]
    pub integrated_gst: Decimal,
    #[ts(as = "String")]
    pub cess: Decimal,
    #[ts(as = "String")]
    pub total_duty: Decimal,
}

// =============================================================================
// Operation
// =============================================================================

/// Computes the customs duty breakdown for a whitelisted goods category.
///
/// The HS code gate runs first: an unrecognized code returns
/// [`CoreError::UnrecognizedCategory`] with no arithmetic performed.
pub fn compute_customs_duty(
    request: &CustomsRequest,
    tariff: CustomsTariff,
) -> CoreResult<CustomsBreakdown> {
    lookup_hs_code(&request.hs_code)?;

    let bcd = request.value_of_goods * request.bcd_rate.fraction();
    let subtotal = request.value_of_goods + bcd + request.shipping_cost + request.insurance_cost;
    let igst = subtotal * request.igst_rate.fraction();
    let cess = subtotal * tariff.cess_rate.fraction();

    Ok(CustomsBreakdown {
        basic_customs_duty: bcd,
        integrated_gst: igst,
        cess,
        total_duty: bcd + igst + cess,
    })
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
    fn test_lookup_known_codes() {
        assert_eq!(lookup_hs_code("8703").unwrap().label, "Vehicles");
        assert_eq!(lookup_hs_code(" 9503 ").unwrap().label, "Toy Items");
    }

    #[test]
    fn test_lookup_unknown_code() {
        let err = lookup_hs_code("9999").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnrecognizedCategory { ref code } if code == "9999"
        ));
    }

    #[test]
    fn test_duty_breakdown() {
        // Goods ₹100000, shipping ₹5000, insurance ₹1000, BCD 10%, IGST 18%
        let request = CustomsRequest::new(
            "8471",
            dec!(100000),
            dec!(5000),
            dec!(1000),
            pct(dec!(10)),
            pct(dec!(18)),
        )
        .unwrap();
        let b = compute_customs_duty(&request, CustomsTariff::default()).unwrap();

        // bcd = 10000; subtotal = 116000
        assert_eq!(b.basic_customs_duty, dec!(10000));
        assert_eq!(b.integrated_gst, dec!(20880));
        assert_eq!(b.cess, dec!(3480));
        assert_eq!(b.total_duty, dec!(34360));
    }

    #[test]
    fn test_duty_additivity() {
        let request = CustomsRequest::new(
            "7113",
            dec!(12345.67),
            dec!(89.10),
            dec!(11.12),
            pct(dec!(7.5)),
            pct(dec!(28)),
        )
        .unwrap();
        let b = compute_customs_duty(&request, CustomsTariff::default()).unwrap();
        assert_eq!(
            b.total_duty,
            b.basic_customs_duty + b.integrated_gst + b.cess
        );
    }

    #[test]
    fn test_unrecognized_code_short_circuits() {
        let request = CustomsRequest::new(
            "0000",
            dec!(100),
            dec!(0),
            dec!(0),
            pct(dec!(10)),
            pct(dec!(18)),
        )
        .unwrap();
        assert!(matches!(
            compute_customs_duty(&request, CustomsTariff::default()),
            Err(CoreError::UnrecognizedCategory { .. })
        ));
    }

    #[test]
    fn test_custom_cess_rate() {
        let request = CustomsRequest::new(
            "8703",
            dec!(1000),
            dec!(0),
            dec!(0),
            Percent::zero(),
            Percent::zero(),
        )
        .unwrap();
        let tariff = CustomsTariff {
            cess_rate: pct(dec!(5)),
        };
        let b = compute_customs_duty(&request, tariff).unwrap();
        assert_eq!(b.cess, dec!(50));
        assert_eq!(b.total_duty, dec!(50));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(CustomsRequest::new(
            "8703",
            dec!(-1),
            dec!(0),
            dec!(0),
            Percent::zero(),
            Percent::zero()
        )
        .is_err());
    }
}
