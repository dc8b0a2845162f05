//! PDF text layer processing.

mod extractor;

pub use extractor::PdfExtractor;

use std::path::Path;

use tracing::debug;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text layer implementations.
///
/// An implementation owns the open document from `open` until `close`.
pub trait PdfProcessor: Sized {
    /// Open the document at `path`.
    fn open(path: &Path) -> Result<Self>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed), in reading order.
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Release the document.
    fn close(self);
}

/// Read every page of `doc` once, in order, and close it.
///
/// Pages are joined by a newline and the result is trimmed. The document is
/// closed whether or not a page read fails.
pub fn extract_document_text<P: PdfProcessor>(doc: P) -> Result<String> {
    let result = read_pages(&doc);
    doc.close();
    result
}

fn read_pages<P: PdfProcessor>(doc: &P) -> Result<String> {
    let page_count = doc.page_count();
    let mut parts = Vec::with_capacity(page_count as usize);

    for page in 1..=page_count {
        parts.push(doc.extract_page_text(page)?);
    }

    let text = parts.join("\n").trim().to_string();
    debug!("Read {} pages, {} chars of text", page_count, text.chars().count());
    Ok(text)
}

/// Open the PDF at `path` with [`PdfExtractor`] and read its text layer.
pub fn read_text(path: &Path) -> Result<String> {
    let doc = PdfExtractor::open(path)?;
    extract_document_text(doc)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Calls {
        pages_read: Vec<u32>,
        closed: u32,
    }

    struct FakePdf {
        pages: Vec<&'static str>,
        fail_on: Option<u32>,
        calls: Rc<RefCell<Calls>>,
    }

    impl FakePdf {
        fn new(pages: Vec<&'static str>) -> (Self, Rc<RefCell<Calls>>) {
            let calls = Rc::new(RefCell::new(Calls::default()));
            let pdf = Self {
                pages,
                fail_on: None,
                calls: Rc::clone(&calls),
            };
            (pdf, calls)
        }
    }

    impl PdfProcessor for FakePdf {
        fn open(_path: &Path) -> Result<Self> {
            unreachable!("fake documents are constructed directly")
        }

        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn extract_page_text(&self, page: u32) -> Result<String> {
            self.calls.borrow_mut().pages_read.push(page);
            if self.fail_on == Some(page) {
                return Err(PdfError::TextExtraction {
                    page,
                    reason: "broken content stream".to_string(),
                });
            }
            Ok(self.pages[(page - 1) as usize].to_string())
        }

        fn close(self) {
            self.calls.borrow_mut().closed += 1;
        }
    }

    #[test]
    fn test_pages_joined_in_order_and_trimmed() {
        let (pdf, calls) = FakePdf::new(vec!["  Invoice #: A-1", "Total: $5.00\n"]);

        let text = extract_document_text(pdf).unwrap();

        assert_eq!(text, "Invoice #: A-1\nTotal: $5.00");
        assert_eq!(calls.borrow().pages_read, vec![1, 2]);
        assert_eq!(calls.borrow().closed, 1);
    }

    #[test]
    fn test_closed_when_page_read_fails() {
        let (mut pdf, calls) = FakePdf::new(vec!["one", "two", "three"]);
        pdf.fail_on = Some(2);

        let err = extract_document_text(pdf).unwrap_err();

        assert!(matches!(err, PdfError::TextExtraction { page: 2, .. }));
        assert_eq!(calls.borrow().pages_read, vec![1, 2]);
        assert_eq!(calls.borrow().closed, 1);
    }

    #[test]
    fn test_empty_document() {
        let (pdf, calls) = FakePdf::new(vec![]);

        assert_eq!(extract_document_text(pdf).unwrap(), "");
        assert_eq!(calls.borrow().closed, 1);
    }
}
