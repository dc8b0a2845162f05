//! Label patterns for invoice field extraction.
//!
//! Each table is an ordered list of candidates for one field. Every pattern
//! is case-insensitive and multi-line, and captures the value in group 1.

use lazy_static::lazy_static;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?im){p}")).unwrap())
        .collect()
}

lazy_static! {
    // Invoice number: "Invoice #:", "Invoice No.:", "Invoice Number:"
    pub static ref INVOICE_NUMBER: Vec<Regex> = compile(&[
        r"Invoice\s*#:\s*([A-Z0-9\-_/]+)",
        r"Invoice\s*No\.?:\s*([A-Z0-9\-_/]+)",
        r"Invoice\s*Number:\s*([A-Z0-9\-_/]+)",
    ]);

    // Invoice date; the bare "Date:" label is the fallback
    pub static ref INVOICE_DATE: Vec<Regex> = compile(&[
        r"Invoice\s*Date:\s*([0-9\-/]+)",
        r"Date:\s*([0-9\-/]+)",
    ]);

    pub static ref DUE_DATE: Vec<Regex> = compile(&[
        r"Due\s*Date:\s*([0-9\-/]+)",
    ]);

    // Purchase order: "PO Number:", "P.O. #:", "PO #:"
    pub static ref PO_NUMBER: Vec<Regex> = compile(&[
        r"PO\s*Number:\s*([A-Z0-9\-_/]+)",
        r"P\.?O\.?\s*#:\s*([A-Z0-9\-_/]+)",
    ]);

    // Vendor: the line under a "From (Vendor)" heading, else "Vendor:" inline
    pub static ref VENDOR: Vec<Regex> = compile(&[
        r"From\s*\(Vendor\)\s*\n([^\n]+)",
        r"Vendor:\s*([^\n]+)",
    ]);

    // Amounts: label, optional "$", number with exactly two fraction digits
    pub static ref SUBTOTAL: Vec<Regex> = compile(&[
        r"Subtotal:\s*(\$?[0-9,]+\.[0-9]{2})",
    ]);

    pub static ref TAX: Vec<Regex> = compile(&[
        r"Tax.*?:\s*(\$?[0-9,]+\.[0-9]{2})",
    ]);

    // Word boundary keeps "Subtotal:" from matching as a total
    pub static ref TOTAL: Vec<Regex> = compile(&[
        r"\bTotal.*?:\s*(\$?[0-9,]+\.[0-9]{2})",
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        for table in [
            &*INVOICE_NUMBER,
            &*INVOICE_DATE,
            &*DUE_DATE,
            &*PO_NUMBER,
            &*VENDOR,
            &*SUBTOTAL,
            &*TAX,
            &*TOTAL,
        ] {
            assert!(!table.is_empty());
            for pattern in table {
                assert_eq!(pattern.captures_len(), 2, "{pattern}");
            }
        }
    }

    #[test]
    fn test_patterns_ignore_case() {
        assert!(INVOICE_NUMBER[0].is_match("INVOICE #: a-1"));
        assert!(DUE_DATE[0].is_match("due date: 2024-01-01"));
    }

    #[test]
    fn test_total_does_not_match_subtotal() {
        assert!(!TOTAL[0].is_match("Subtotal: $100.00"));
        assert!(TOTAL[0].is_match("Total Due: $110.00"));
    }
}
