//! Invoice and purchase order number extraction.

use super::matcher::PatternExtractor;
use super::patterns::{INVOICE_NUMBER, PO_NUMBER};
use super::FieldExtractor;

/// Extracted document identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceIdentifiers {
    /// Invoice number.
    pub invoice_no: Option<String>,
    /// Purchase order number.
    pub po_number: Option<String>,
}

/// Extract invoice and PO numbers from invoice text.
pub fn extract_identifiers(text: &str) -> InvoiceIdentifiers {
    InvoiceIdentifiers {
        invoice_no: PatternExtractor::new("invoice_no", &INVOICE_NUMBER).extract(text),
        po_number: PatternExtractor::new("po_number", &PO_NUMBER).extract(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice_no(text: &str) -> Option<String> {
        extract_identifiers(text).invoice_no
    }

    fn po_number(text: &str) -> Option<String> {
        extract_identifiers(text).po_number
    }

    #[test]
    fn test_invoice_number_labels() {
        assert_eq!(invoice_no("Invoice #: INV-1001"), Some("INV-1001".to_string()));
        assert_eq!(invoice_no("Invoice No.: 2024/17"), Some("2024/17".to_string()));
        assert_eq!(invoice_no("Invoice No: A_77"), Some("A_77".to_string()));
        assert_eq!(invoice_no("Invoice Number: 000123"), Some("000123".to_string()));
        assert_eq!(invoice_no("invoice#:abc-9"), Some("abc-9".to_string()));
    }

    #[test]
    fn test_invoice_number_stops_at_other_characters() {
        assert_eq!(invoice_no("Invoice #: INV-1001 (copy)"), Some("INV-1001".to_string()));
    }

    #[test]
    fn test_invoice_number_precedence() {
        let text = "Invoice Number: SECOND\nInvoice #: FIRST";
        assert_eq!(invoice_no(text), Some("FIRST".to_string()));
    }

    #[test]
    fn test_po_number_labels() {
        assert_eq!(po_number("PO Number: PO-55"), Some("PO-55".to_string()));
        assert_eq!(po_number("P.O. #: 8812"), Some("8812".to_string()));
        assert_eq!(po_number("PO #: X/1"), Some("X/1".to_string()));
    }

    #[test]
    fn test_missing_identifiers() {
        assert_eq!(extract_identifiers("Invoice\nthanks"), InvoiceIdentifiers::default());
    }
}
