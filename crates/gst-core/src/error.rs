//! # Error Types
//!
//! Domain-specific error types for gst-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gst-core errors (this file)                                           │
//! │  ├── CoreError        - Domain errors (unknown HS code, ...)           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gst-invoice errors (separate crate)                                   │
//! │  └── InvoiceError     - Document assembly failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → InvoiceError → presentation       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending code)
//! 3. Errors are enum variants, never String
//! 4. Every failure is a rejected request: the caller can always retry with
//!    corrected input. There is no fatal error class in this crate.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. They should be caught and
/// translated to user-facing messages by the presentation layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The goods classification code is not in the recognized whitelist.
    ///
    /// ## When This Occurs
    /// - The user typed an HS code that is not one of the recognized
    ///   category codes (see [`crate::customs::HS_CODE_WHITELIST`])
    ///
    /// Raised before any duty arithmetic runs.
    #[error("Unrecognized goods category code: {code}")]
    UnrecognizedCategory { code: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a form field doesn't meet requirements.
/// Used for early validation before any computation runs; the offending
/// field is always named so the form can highlight it.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value cannot be parsed (e.g., non-numeric amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
