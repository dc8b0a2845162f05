//! Rule-based invoice parser for PDF text layers.

use tracing::debug;

use crate::models::invoice::{FieldWarning, InvoiceFields, CURRENCY};

use super::rules::{extract_amounts, extract_dates, extract_identifiers, extract_vendor};

/// Result of invoice extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Extracted invoice fields.
    pub fields: InvoiceFields,
    /// Missing-field warnings, in check order.
    pub warnings: Vec<FieldWarning>,
    /// Length of the parsed text in characters.
    pub text_length: usize,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse invoice fields from text. Never fails; missing fields are `None`.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Invoice parser driven by ordered label patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInvoiceParser;

impl TextInvoiceParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the field record for `text`.
    pub fn extract_fields(&self, text: &str) -> InvoiceFields {
        let identifiers = extract_identifiers(text);
        let dates = extract_dates(text);
        let amounts = extract_amounts(text);

        InvoiceFields {
            invoice_no: identifiers.invoice_no,
            invoice_date: dates.invoice_date,
            due_date: dates.due_date,
            po_number: identifiers.po_number,
            vendor: extract_vendor(text),
            subtotal: amounts.subtotal,
            tax: amounts.tax,
            total: amounts.total,
            currency: CURRENCY.to_string(),
        }
    }
}

impl InvoiceParser for TextInvoiceParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let fields = self.extract_fields(text);
        let warnings = derive_warnings(&fields);

        debug!(
            "Extracted invoice {:?} (total {:?}) with {} warnings",
            fields.invoice_no,
            fields.total,
            warnings.len()
        );

        ExtractionResult {
            fields,
            warnings,
            text_length: text.chars().count(),
        }
    }
}

/// Warn about missing invoice number, total, and vendor, in that order.
///
/// A total of zero counts as missing. Other fields never produce warnings.
pub fn derive_warnings(fields: &InvoiceFields) -> Vec<FieldWarning> {
    let mut warnings = Vec::new();

    if is_blank(fields.invoice_no.as_deref()) {
        warnings.push(FieldWarning::InvoiceNoNotFound);
    }
    if fields.total.is_none_or(|total| total.is_zero()) {
        warnings.push(FieldWarning::TotalNotFound);
    }
    if is_blank(fields.vendor.as_deref()) {
        warnings.push(FieldWarning::VendorNotFound);
    }

    warnings
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
