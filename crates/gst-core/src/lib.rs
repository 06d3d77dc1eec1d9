//! # gst-core: Pure Business Logic for the GST Toolkit
//!
//! This crate is the **heart** of the GST toolkit. It contains all tax
//! computation logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       GST Toolkit Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Desktop Forms (out of scope)                   │   │
//! │  │   GST Calc ──► Customs Calc ──► Eligibility ──► Offset Calc    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw field strings                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ gst-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌────────┐ ┌───────┐  │   │
//! │  │   │   tax   │ │ customs │ │composition│ │ offset │ │ words │  │   │
//! │  │   │ GST     │ │ BCD     │ │ scheme    │ │ GSTR   │ │ crore │  │   │
//! │  │   │ engine  │ │ IGST    │ │ rules     │ │ settle │ │ lakh  │  │   │
//! │  │   └─────────┘ └─────────┘ └───────────┘ └────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                gst-invoice (document assembly)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shared value types (Percent, TaxMode, Rupees, ...)
//! - [`tax`] - The GST engine (exclusive/inclusive breakdowns)
//! - [`customs`] - Customs duty engine (BCD + IGST + cess)
//! - [`composition`] - Composition-scheme eligibility rules
//! - [`offset`] - Input/output GST offset settlement
//! - [`words`] - Amount-in-words (Indian crore/lakh grouping)
//! - [`validation`] - Boundary parsing of raw form fields
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, network and printer access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are `rust_decimal::Decimal`;
//!    rounding happens only at the display boundary ([`types::Rupees`])
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gst_core::tax::compute_exclusive;
//! use gst_core::types::Percent;
//! use rust_decimal::Decimal;
//!
//! let rate = Percent::new(Decimal::from(18)).unwrap();
//! let profit = Percent::zero();
//!
//! let breakdown = compute_exclusive(Decimal::from(1000), rate, profit).unwrap();
//! assert_eq!(breakdown.tax_amount, Decimal::from(180));
//! assert_eq!(breakdown.post_tax_price, Decimal::from(1180));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod composition;
pub mod customs;
pub mod error;
pub mod offset;
pub mod tax;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gst_core::Percent` instead of
// `use gst_core::types::Percent`

pub use error::{CoreError, CoreResult, ValidationError};
pub use tax::TaxBreakdown;
pub use types::{Percent, TaxMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The standard GST rate slabs, in percent.
///
/// ## Why a constant?
/// The presentation layer offers these in its rate picker. The engine itself
/// accepts any 0-100 rate; the slabs are a UI convention, not a rule.
pub const GST_RATE_SLABS: [u32; 5] = [3, 5, 12, 18, 28];
