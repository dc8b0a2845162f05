//! Vendor name extraction.

use super::matcher::PatternExtractor;
use super::patterns::VENDOR;
use super::FieldExtractor;

/// Extract the vendor name from invoice text.
///
/// The line following a `From (Vendor)` heading is preferred over an inline
/// `Vendor:` label.
pub fn extract_vendor(text: &str) -> Option<String> {
    PatternExtractor::new("vendor", &VENDOR).extract(text)
}
