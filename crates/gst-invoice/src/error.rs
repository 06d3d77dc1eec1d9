//! # Invoice Assembly Errors
//!
//! Thin error layer over gst-core, following the same taxonomy: every
//! failure is a rejected request the caller can correct and retry.

use thiserror::Error;

/// Errors raised while assembling an invoice document.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// A required party or detail field is missing or empty.
    #[error("{field} is required on the invoice")]
    MissingField { field: String },

    /// The invoice has no line items.
    #[error("invoice must contain at least one line item")]
    Empty,

    /// A core computation rejected its input (wraps gst-core errors).
    #[error(transparent)]
    Core(#[from] gst_core::CoreError),
}

impl From<gst_core::ValidationError> for InvoiceError {
    fn from(err: gst_core::ValidationError) -> Self {
        InvoiceError::Core(err.into())
    }
}

/// Convenience type alias for Results with InvoiceError.
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvoiceError::MissingField {
            field: "company name".to_string(),
        };
        assert_eq!(err.to_string(), "company name is required on the invoice");
        assert_eq!(
            InvoiceError::Empty.to_string(),
            "invoice must contain at least one line item"
        );
    }

    #[test]
    fn test_core_errors_pass_through() {
        let core = gst_core::CoreError::UnrecognizedCategory {
            code: "9999".to_string(),
        };
        let err: InvoiceError = core.into();
        assert_eq!(err.to_string(), "Unrecognized goods category code: 9999");
    }
}
