//! Amount extraction and money normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::matcher::PatternExtractor;
use super::patterns::{SUBTOTAL, TAX, TOTAL};
use super::FieldExtractor;

/// Labeled amount extractor: a pattern table followed by [`parse_money`].
#[derive(Debug, Clone, Copy)]
pub struct AmountExtractor {
    label: PatternExtractor,
}

impl AmountExtractor {
    pub fn subtotal() -> Self {
        Self {
            label: PatternExtractor::new("subtotal", &SUBTOTAL),
        }
    }

    pub fn tax() -> Self {
        Self {
            label: PatternExtractor::new("tax", &TAX),
        }
    }

    pub fn total() -> Self {
        Self {
            label: PatternExtractor::new("total", &TOTAL),
        }
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        parse_money(self.label.extract(text).as_deref())
    }
}

/// Extracted amounts from an invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceAmounts {
    /// Amount before tax.
    pub subtotal: Option<Decimal>,
    /// Tax amount.
    pub tax: Option<Decimal>,
    /// Invoice total.
    pub total: Option<Decimal>,
}

/// Extract amounts from invoice text.
///
/// Each amount is looked up independently; they are not cross-checked.
pub fn extract_amounts(text: &str) -> InvoiceAmounts {
    InvoiceAmounts {
        subtotal: AmountExtractor::subtotal().extract(text),
        tax: AmountExtractor::tax().extract(text),
        total: AmountExtractor::total().extract(text),
    }
}

/// Normalize a matched money string (e.g., "$1,234.50") to a decimal.
///
/// Every character other than an ASCII digit, `.` or `-` is dropped before
/// parsing. Returns `None` for missing input or anything that does not parse.
pub fn parse_money(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw.filter(|s| !s.is_empty())?;

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned).ok()
}
