//! # Invoice Document Types
//!
//! The typed invoice document. Every detail is a fixed, named struct field
//! validated once at assembly - no string-keyed bags of dynamically named
//! form fields.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GST INVOICE RECEIPT                              │
//! │                                                                         │
//! │  ┌──────────────────────────────┬──────────────────────────────────┐   │
//! │  │ CompanyDetails               │ TransportationDetails            │   │
//! │  │  name, GSTIN, address,       │  vehicle no, supply date,        │   │
//! │  │  invoice no, invoice date    │  place of supply                 │   │
//! │  ├──────────────────────────────┼──────────────────────────────────┤   │
//! │  │ Receiver (billed_to)         │ Consignee (shipped_to)           │   │
//! │  │  CustomerDetails             │  CustomerDetails                 │   │
//! │  ├──────────────────────────────┴──────────────────────────────────┤   │
//! │  │ LineItem × n: Sr | Desc | HSN | Qty | Unit | Rate | Total |     │   │
//! │  │               Discount | Taxable | CGST | SGST | IGST          │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │ InvoiceTotals: value (figure), value (words), reverse charge    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gst_core::types::Percent;

// =============================================================================
// Parties
// =============================================================================

/// The issuing company's details.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyDetails {
    pub name: String,
    pub gstin: String,
    pub address: String,
    /// Serial number of the invoice - a caller-supplied business identifier.
    pub invoice_number: String,
    #[ts(as = "String")]
    pub invoice_date: DateTime<Utc>,
}

/// A receiving party - used for both "billed to" and "shipped to".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    pub state: String,
    pub state_code: String,
    pub gstin: String,
}

/// Transportation of the supplied goods.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransportationDetails {
    pub vehicle_number: String,
    /// Free-form date and time of supply, as entered on the form.
    pub supply_date: String,
    pub supply_place: String,
}

// =============================================================================
// Line Items
// =============================================================================

/// One invoice row. Amounts are frozen at assembly time from a
/// `gst_core::TaxBreakdown`, so later recomputation cannot drift the
/// document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// 1-based row number.
    pub serial: u32,
    pub description: String,
    pub hsn_code: String,
    #[ts(as = "String")]
    pub quantity: Decimal,
    /// Unit of measure ("Nos", "Kg", ...).
    pub unit: String,
    /// Pre-tax unit rate.
    #[ts(as = "String")]
    pub rate: Decimal,
    /// Row total including tax.
    #[ts(as = "String")]
    pub total: Decimal,
    #[ts(as = "String")]
    pub discount: Decimal,
    #[ts(as = "String")]
    pub taxable_value: Decimal,
    pub cgst_rate: Percent,
    #[ts(as = "String")]
    pub cgst_amount: Decimal,
    pub sgst_rate: Percent,
    #[ts(as = "String")]
    pub sgst_amount: Decimal,
    pub igst_rate: Percent,
    #[ts(as = "String")]
    pub igst_amount: Decimal,
}

// =============================================================================
// Totals
// =============================================================================

/// The invoice footer totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    /// Total invoice value, in figures.
    #[ts(as = "String")]
    pub total_value: Decimal,
    /// Total invoice value, in words (Indian grouping).
    pub total_in_words: String,
    /// Tax amount subject to reverse charge.
    #[ts(as = "String")]
    pub reverse_charge: Decimal,
}

// =============================================================================
// Invoice
// =============================================================================

/// A fully assembled invoice document, ready for an export collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub company: CompanyDetails,
    /// Details of Receiver (Billed to).
    pub billed_to: CustomerDetails,
    /// Details of Consignee (Shipped to).
    pub shipped_to: CustomerDetails,
    pub transportation: TransportationDetails,
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invoice_serializes_with_decimal_strings() {
        let totals = InvoiceTotals {
            total_value: dec!(1180.00),
            total_in_words: "One Thousand One Hundred Eighty Rupees".to_string(),
            reverse_charge: dec!(0),
        };
        let json = serde_json::to_value(&totals).unwrap();
        // rust_decimal serializes as a JSON string; export collaborators
        // must not lose precision in transit
        assert_eq!(json["total_value"], "1180.00");
        assert_eq!(json["reverse_charge"], "0");
    }
}
