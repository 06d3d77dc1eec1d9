//! # Composition Scheme Eligibility
//!
//! Rule evaluation for the GST composition scheme - the simplified flat-rate
//! regime available to small businesses.
//!
//! ## Rule Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Composition Scheme Eligibility Rules                       │
//! │                                                                         │
//! │  Eligible ONLY when all four hold:                                     │
//! │                                                                         │
//! │  1. annual_turnover ≤ ceiling (default ₹1,50,00,000)                   │
//! │  2. business_type ∈ { Goods, Both }                                    │
//! │  3. no interstate sales                                                │
//! │  4. registration ∈ { RegisteredRegular, NotRegistered }                │
//! │                                                                         │
//! │  When ineligible, one reason line per violated rule, in that order.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{BusinessType, RegistrationStatus};

// =============================================================================
// Rules (policy constants)
// =============================================================================

/// The composition-scheme policy thresholds.
///
/// ## Why configurable?
/// The turnover ceiling is a jurisdiction's rule that has changed over time.
/// The default is the long-standing ₹1.5 crore ceiling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositionRules {
    /// Maximum annual turnover allowed under the scheme, in rupees.
    #[ts(as = "String")]
    pub turnover_ceiling: Decimal,
}

impl Default for CompositionRules {
    fn default() -> Self {
        CompositionRules {
            // ₹1.5 crore
            turnover_ceiling: Decimal::from(15_000_000),
        }
    }
}

// =============================================================================
// Profile
// =============================================================================

/// A business profile, as entered on the eligibility form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositionProfile {
    /// Annual turnover in rupees. Must be strictly positive.
    #[ts(as = "String")]
    pub annual_turnover: Decimal,
    pub business_type: BusinessType,
    pub has_interstate_sales: bool,
    pub registration_status: RegistrationStatus,
}

impl CompositionProfile {
    /// Creates a profile, rejecting a non-positive turnover.
    pub fn new(
        annual_turnover: Decimal,
        business_type: BusinessType,
        has_interstate_sales: bool,
        registration_status: RegistrationStatus,
    ) -> Result<Self, ValidationError> {
        if annual_turnover <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: "annual turnover".to_string(),
            });
        }
        Ok(CompositionProfile {
            annual_turnover,
            business_type,
            has_interstate_sales,
            registration_status,
        })
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// The outcome of an eligibility check.
///
/// `reasons` is empty when eligible; otherwise it holds one human-readable
/// line per violated rule, in the fixed rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

// =============================================================================
// Operation
// =============================================================================

/// Evaluates composition-scheme eligibility for a business profile.
pub fn evaluate_eligibility(
    profile: &CompositionProfile,
    rules: CompositionRules,
) -> EligibilityVerdict {
    let mut reasons = Vec::new();

    if profile.annual_turnover > rules.turnover_ceiling {
        reasons
            .push("Your turnover exceeds the maximum limit for Composition Scheme.".to_string());
    }
    if !matches!(
        profile.business_type,
        BusinessType::Goods | BusinessType::Both
    ) {
        reasons.push(
            "Composition Scheme is applicable only for businesses dealing in goods or both goods and services."
                .to_string(),
        );
    }
    if profile.has_interstate_sales {
        reasons.push("Interstate sales are not allowed under the Composition Scheme.".to_string());
    }
    if profile.registration_status == RegistrationStatus::RegisteredComposition {
        reasons.push("You are already registered under the Composition Scheme.".to_string());
    }

    EligibilityVerdict {
        eligible: reasons.is_empty(),
        reasons,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
