//! PDF text extraction using lopdf.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Document,
    /// Page numbers in document order.
    pages: Vec<u32>,
}

impl PdfExtractor {
    fn from_document(mut doc: Document) -> Result<Self> {
        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let mut pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        pages.sort_unstable();

        debug!("Loaded PDF with {} pages", pages.len());
        Ok(Self {
            document: doc,
            pages,
        })
    }
}

impl PdfProcessor for PdfExtractor {
    fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PdfError::NotFound(path.to_path_buf()));
        }

        let doc = Document::load(path).map_err(|e| PdfError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let page_number = page
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx as usize))
            .copied()
            .ok_or_else(|| PdfError::TextExtraction {
                page,
                reason: "page out of range".to_string(),
            })?;

        let text = self
            .document
            .extract_text(&[page_number])
            .map_err(|e| PdfError::TextExtraction {
                page,
                reason: e.to_string(),
            })?;

        trace!("Page {}: {} chars", page, text.len());
        Ok(text)
    }

    fn close(self) {
        debug!("Closing PDF with {} pages", self.pages.len());
        drop(self.document);
    }
}
