//! Date extraction for invoices.
//!
//! Dates are reported exactly as written; no calendar parsing is attempted.

use super::matcher::PatternExtractor;
use super::patterns::{DUE_DATE, INVOICE_DATE};
use super::FieldExtractor;

/// Extracted dates from an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDates {
    /// Invoice (issue) date.
    pub invoice_date: Option<String>,
    /// Payment due date.
    pub due_date: Option<String>,
}

/// Extract labeled dates from invoice text.
pub fn extract_dates(text: &str) -> InvoiceDates {
    InvoiceDates {
        invoice_date: PatternExtractor::new("invoice_date", &INVOICE_DATE).extract(text),
        due_date: PatternExtractor::new("due_date", &DUE_DATE).extract(text),
    }
}
