//! Single-document extraction run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{error, info};

use invex_core::models::config::InvexConfig;

use crate::report::Outcome;

/// Extract the invoice at `path` and classify the result.
pub fn run(path: &Path, config: &InvexConfig) -> Outcome {
    if !path.is_file() {
        return Outcome::InputError(format!("PDF not found: {}", path.display()));
    }

    // Malformed documents can panic inside the PDF decoder
    let result = panic::catch_unwind(AssertUnwindSafe(|| invex_core::extract_invoice(path, config)));

    match result {
        Ok(Ok(extraction)) => {
            info!(
                "Extracted {} chars with {} warnings",
                extraction.text_length,
                extraction.warnings.len()
            );
            Outcome::Success(extraction)
        }
        Ok(Err(e)) => {
            error!("Extraction failed: {}", e);
            Outcome::ExtractionError(e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("PDF decoder panicked: {}", message);
            Outcome::ExtractionError(format!("PDF processing failed: {message}"))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
