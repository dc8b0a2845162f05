//! Core library for text-based PDF invoice extraction.
//!
//! This crate provides:
//! - PDF text layer reading (no OCR)
//! - Rule-based invoice field extraction (numbers, dates, vendor, amounts)
//! - Money normalization and missing-field warnings

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

use std::path::Path;

use tracing::{debug, info};

pub use error::{ExtractionError, InvexError, PdfError, Result};
pub use invoice::{ExtractionResult, InvoiceParser, TextInvoiceParser};
pub use models::config::InvexConfig;
pub use models::invoice::{FieldWarning, InvoiceFields, CURRENCY};
pub use pdf::{PdfExtractor, PdfProcessor};

/// Read the PDF at `path` and extract invoice fields from its text layer.
///
/// Fails with [`ExtractionError::NoText`] when the text layer is shorter than
/// `config.pdf.min_text_length` characters.
pub fn extract_invoice(path: &Path, config: &InvexConfig) -> Result<ExtractionResult> {
    info!("Processing file: {}", path.display());

    let text = pdf::read_text(path)?;
    let length = text.chars().count();
    debug!("Extracted {} chars of text", length);

    check_text_length(length, config.pdf.min_text_length)?;

    Ok(TextInvoiceParser::new().parse(&text))
}

fn check_text_length(length: usize, min_length: usize) -> std::result::Result<(), ExtractionError> {
    if length < min_length {
        return Err(ExtractionError::NoText { length, min_length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_threshold() {
        assert!(matches!(
            check_text_length(5, 20),
            Err(ExtractionError::NoText { length: 5, min_length: 20 })
        ));
        assert!(check_text_length(0, 20).is_err());
        assert!(check_text_length(19, 20).is_err());
        assert!(check_text_length(20, 20).is_ok());
    }

    #[test]
    fn test_extract_invoice_missing_file() {
        let err = extract_invoice(Path::new("/nonexistent/invoice.pdf"), &InvexConfig::default())
            .unwrap_err();
        assert!(matches!(err, InvexError::Pdf(PdfError::NotFound(_))));
    }
}
