//! Invoice field extraction module.

mod parser;
pub mod rules;

pub use parser::{derive_warnings, ExtractionResult, InvoiceParser, TextInvoiceParser};
