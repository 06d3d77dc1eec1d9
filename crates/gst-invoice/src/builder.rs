//! # Invoice Builder
//!
//! Assembles an [`Invoice`] from party details and per-item tax breakdowns.
//!
//! ## Assembly Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      InvoiceBuilder Flow                                │
//! │                                                                         │
//! │  InvoiceBuilder::new(SupplyKind)                                       │
//! │       │                                                                 │
//! │       ├── .company(..) .billed_to(..) .transportation(..)              │
//! │       │                                                                 │
//! │       ├── .add_item(spec, rate, &TaxBreakdown)   (repeat per row)      │
//! │       │        IntraState: tax split CGST/SGST, half each             │
//! │       │        InterState: full tax booked as IGST                    │
//! │       │                                                                 │
//! │       └── .build()                                                     │
//! │                ├── required fields present? items non-empty?           │
//! │                ├── totals = Σ row totals                               │
//! │                └── total_in_words via gst_core::words                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are frozen into [`LineItem`]s as rows are added, the same way a
//! sale freezes product prices: editing the calculator afterwards never
//! changes an assembled row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use gst_core::tax::TaxBreakdown;
use gst_core::types::Percent;
use gst_core::words::amount_in_words;

use crate::error::{InvoiceError, InvoiceResult};
use crate::model::{
    CompanyDetails, CustomerDetails, Invoice, InvoiceTotals, LineItem, TransportationDetails,
};

// =============================================================================
// Supply Kind
// =============================================================================

/// Where the supply crosses state lines, which decides the tax heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SupplyKind {
    /// Within one state: tax splits into equal CGST and SGST halves.
    IntraState,
    /// Across states: the full tax is booked as IGST.
    InterState,
}

// =============================================================================
// Line Item Spec
// =============================================================================

/// The descriptive half of a line item; the monetary half comes from a
/// [`TaxBreakdown`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemSpec {
    pub description: String,
    pub hsn_code: String,
    #[ts(as = "String")]
    pub quantity: Decimal,
    pub unit: String,
    #[ts(as = "String")]
    pub discount: Decimal,
}

// =============================================================================
// Builder
// =============================================================================

/// Accumulates invoice parts, then validates and totals them in [`build`].
///
/// [`build`]: InvoiceBuilder::build
#[derive(Debug)]
pub struct InvoiceBuilder {
    supply_kind: SupplyKind,
    company: Option<CompanyDetails>,
    billed_to: Option<CustomerDetails>,
    shipped_to: Option<CustomerDetails>,
    transportation: Option<TransportationDetails>,
    items: Vec<LineItem>,
}

impl InvoiceBuilder {
    /// Starts an invoice for the given supply kind.
    pub fn new(supply_kind: SupplyKind) -> Self {
        InvoiceBuilder {
            supply_kind,
            company: None,
            billed_to: None,
            shipped_to: None,
            transportation: None,
            items: Vec::new(),
        }
    }

    /// Sets the issuing company.
    pub fn company(mut self, company: CompanyDetails) -> Self {
        self.company = Some(company);
        self
    }

    /// Sets the receiver (billed-to party).
    pub fn billed_to(mut self, customer: CustomerDetails) -> Self {
        self.billed_to = Some(customer);
        self
    }

    /// Sets the consignee (shipped-to party). When omitted, the receiver is
    /// used for both.
    pub fn shipped_to(mut self, customer: CustomerDetails) -> Self {
        self.shipped_to = Some(customer);
        self
    }

    /// Sets the transportation details.
    pub fn transportation(mut self, transportation: TransportationDetails) -> Self {
        self.transportation = Some(transportation);
        self
    }

    /// Adds a line item, freezing the breakdown's amounts into the row.
    ///
    /// The rate column carries the pre-tax price, the total column the
    /// post-tax price, exactly as the calculator displayed them.
    pub fn add_item(
        mut self,
        spec: LineItemSpec,
        tax_rate: Percent,
        breakdown: &TaxBreakdown,
    ) -> Self {
        let serial = self.items.len() as u32 + 1;
        let (cgst_rate, cgst_amount, sgst_rate, sgst_amount, igst_rate, igst_amount) =
            match self.supply_kind {
                SupplyKind::IntraState => (
                    tax_rate.half(),
                    breakdown.half_tax_amount,
                    tax_rate.half(),
                    breakdown.half_tax_amount,
                    Percent::zero(),
                    Decimal::ZERO,
                ),
                SupplyKind::InterState => (
                    Percent::zero(),
                    Decimal::ZERO,
                    Percent::zero(),
                    Decimal::ZERO,
                    tax_rate,
                    breakdown.tax_amount,
                ),
            };

        debug!(
            serial,
            description = %spec.description,
            hsn = %spec.hsn_code,
            total = %breakdown.post_tax_price,
            "invoice line item added"
        );

        self.items.push(LineItem {
            serial,
            description: spec.description,
            hsn_code: spec.hsn_code,
            quantity: spec.quantity,
            unit: spec.unit,
            rate: breakdown.pre_tax_price,
            total: breakdown.post_tax_price,
            discount: spec.discount,
            taxable_value: breakdown.taxable_value,
            cgst_rate,
            cgst_amount,
            sgst_rate,
            sgst_amount,
            igst_rate,
            igst_amount,
        });
        self
    }

    /// Validates the accumulated parts and produces the final document.
    ///
    /// ## Errors
    /// - [`InvoiceError::MissingField`] when a required party or field is
    ///   absent or blank
    /// - [`InvoiceError::Empty`] when no line items were added
    /// - [`InvoiceError::Core`] when the total cannot be rendered in words
    pub fn build(self) -> InvoiceResult<Invoice> {
        let company = self.company.ok_or_else(|| missing("company details"))?;
        require_text("company name", &company.name)?;
        require_text("company GSTIN", &company.gstin)?;
        require_text("invoice number", &company.invoice_number)?;

        let billed_to = self.billed_to.ok_or_else(|| missing("customer details"))?;
        require_text("customer name", &billed_to.name)?;

        let transportation = self
            .transportation
            .ok_or_else(|| missing("transportation details"))?;

        if self.items.is_empty() {
            return Err(InvoiceError::Empty);
        }

        // Ship-to defaults to bill-to when the consignee is the receiver
        let shipped_to = self.shipped_to.unwrap_or_else(|| billed_to.clone());

        let total_value: Decimal = self.items.iter().map(|item| item.total).sum();
        let total_in_words = amount_in_words(total_value)?;

        info!(
            invoice_number = %company.invoice_number,
            items = self.items.len(),
            total = %total_value,
            "invoice assembled"
        );

        Ok(Invoice {
            company,
            billed_to,
            shipped_to,
            transportation,
            items: self.items,
            totals: InvoiceTotals {
                total_value,
                total_in_words,
                reverse_charge: Decimal::ZERO,
            },
        })
    }
}

fn missing(field: &str) -> InvoiceError {
    InvoiceError::MissingField {
        field: field.to_string(),
    }
}

fn require_text(field: &str, value: &str) -> InvoiceResult<()> {
    if value.trim().is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
