//! Rule-based field extractors for text-based invoices.

pub mod amounts;
pub mod dates;
pub mod identifiers;
pub mod matcher;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_amounts, parse_money, AmountExtractor, InvoiceAmounts};
pub use dates::{extract_dates, InvoiceDates};
pub use identifiers::{extract_identifiers, InvoiceIdentifiers};
pub use matcher::{find_first, PatternExtractor};
pub use vendor::extract_vendor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
