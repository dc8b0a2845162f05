//! Invoice field record produced from a PDF text layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency reported for every invoice. It is never inferred from the text.
pub const CURRENCY: &str = "USD";

/// Fixed-shape record of extracted invoice fields.
///
/// Every field is always serialized; fields that were not found become
/// `null`. Money fields serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFields {
    /// Invoice number/identifier.
    pub invoice_no: Option<String>,

    /// Invoice date, as written on the document.
    pub invoice_date: Option<String>,

    /// Payment due date, as written on the document.
    pub due_date: Option<String>,

    /// Purchase order number.
    pub po_number: Option<String>,

    /// Vendor (issuer) name.
    pub vendor: Option<String>,

    /// Amount before tax.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub subtotal: Option<Decimal>,

    /// Tax amount.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub tax: Option<Decimal>,

    /// Invoice total.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,

    /// Currency code, always [`CURRENCY`].
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    CURRENCY.to_string()
}

impl InvoiceFields {
    /// Create a record with every field absent.
    pub fn empty() -> Self {
        Self {
            invoice_no: None,
            invoice_date: None,
            due_date: None,
            po_number: None,
            vendor: None,
            subtotal: None,
            tax: None,
            total: None,
            currency: default_currency(),
        }
    }
}

impl Default for InvoiceFields {
    fn default() -> Self {
        Self::empty()
    }
}

/// Advisory signal that an operationally important field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWarning {
    /// No invoice number was found.
    InvoiceNoNotFound,
    /// No (non-zero) total was found.
    TotalNotFound,
    /// No vendor was found.
    VendorNotFound,
}

impl FieldWarning {
    /// Warning code as it appears in output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvoiceNoNotFound => "invoice_no_not_found",
            Self::TotalNotFound => "total_not_found",
            Self::VendorNotFound => "vendor_not_found",
        }
    }
}

impl std::fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_record_serializes_every_key() {
        let value = serde_json::to_value(InvoiceFields::empty()).unwrap();

        assert_eq!(
            value,
            json!({
                "invoice_no": null,
                "invoice_date": null,
                "due_date": null,
                "po_number": null,
                "vendor": null,
                "subtotal": null,
                "tax": null,
                "total": null,
                "currency": "USD",
            })
        );
    }

    #[test]
    fn test_money_serializes_as_number() {
        let fields = InvoiceFields {
            total: Some(Decimal::from_str("1234.50").unwrap()),
            ..InvoiceFields::empty()
        };

        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["total"], json!(1234.5));
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(
            serde_json::to_value(FieldWarning::InvoiceNoNotFound).unwrap(),
            json!("invoice_no_not_found")
        );
        assert_eq!(FieldWarning::TotalNotFound.to_string(), "total_not_found");
        assert_eq!(FieldWarning::VendorNotFound.code(), "vendor_not_found");
    }
}
