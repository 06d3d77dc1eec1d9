//! # gst-invoice: Invoice Document Assembly
//!
//! Builds the structured GST invoice document from `gst-core` results.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Assembly Flow                              │
//! │                                                                         │
//! │  Invoice form (out of scope)                                           │
//! │       │ parties, transportation, item descriptions                     │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 gst-invoice (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐         ┌───────────────────────────┐      │   │
//! │  │   │    model      │         │         builder           │      │   │
//! │  │   │ CompanyDetails│◄────────│ InvoiceBuilder            │      │   │
//! │  │   │ LineItem      │         │  + TaxBreakdown per item  │      │   │
//! │  │   │ Invoice       │         │  + amount_in_words totals │      │   │
//! │  │   └───────────────┘         └───────────────────────────┘      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serialized Invoice                     │
//! │                                ▼                                        │
//! │  PDF / print collaborators (out of scope)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`] - The invoice document types (typed, no string-keyed fields)
//! - [`builder`] - Assembly from `gst-core` breakdowns
//! - [`error`] - Assembly error types

pub mod builder;
pub mod error;
pub mod model;

pub use builder::{InvoiceBuilder, LineItemSpec, SupplyKind};
pub use error::InvoiceError;
pub use model::Invoice;
