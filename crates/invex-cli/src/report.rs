//! JSON report written to stdout, and the matching exit codes.

use std::process::ExitCode;

use serde::Serialize;

use invex_core::{ExtractionResult, FieldWarning, InvoiceFields};

/// Exit code for a successful extraction.
pub const EXIT_OK: u8 = 0;
/// Exit code for bad arguments or a missing file.
pub const EXIT_INPUT_ERROR: u8 = 2;
/// Exit code for an unreadable or non-text PDF, or any other failure.
pub const EXIT_EXTRACTION_ERROR: u8 = 3;

const USAGE: &str = "Usage: --pdf <path>";

/// Final state of a run.
#[derive(Debug)]
pub enum Outcome {
    /// Fields were extracted.
    Success(ExtractionResult),
    /// The invocation or the input path was invalid.
    InputError(String),
    /// The document could not be read or yielded no usable text.
    ExtractionError(String),
}

/// Serialized form of an [`Outcome`].
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extraction_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a InvoiceFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a [FieldWarning]>,
}

impl<'a> Report<'a> {
    fn failure(message: &'a str) -> Self {
        Self {
            ok: false,
            error: Some(message),
            extraction_mode: None,
            fields: None,
            warnings: None,
        }
    }
}

impl Outcome {
    pub fn usage() -> Self {
        Self::InputError(USAGE.to_string())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success(_) => EXIT_OK,
            Self::InputError(_) => EXIT_INPUT_ERROR,
            Self::ExtractionError(_) => EXIT_EXTRACTION_ERROR,
        }
    }

    pub fn report(&self) -> Report<'_> {
        match self {
            Self::Success(result) => Report {
                ok: true,
                error: None,
                extraction_mode: Some("text"),
                fields: Some(&result.fields),
                warnings: Some(result.warnings.as_slice()),
            },
            Self::InputError(message) | Self::ExtractionError(message) => {
                Report::failure(message)
            }
        }
    }

    /// Serialize the report as a single JSON line, with its exit code.
    pub fn render(&self) -> (String, u8) {
        match serde_json::to_string(&self.report()) {
            Ok(json) => (json, self.exit_code()),
            Err(e) => {
                let message = format!("failed to serialize result: {e}");
                let json = serde_json::json!({ "ok": false, "error": message }).to_string();
                (json, EXIT_EXTRACTION_ERROR)
            }
        }
    }

    /// Print the report to stdout and return the process exit code.
    pub fn emit(self) -> ExitCode {
        let (json, code) = self.render();
        println!("{json}");
        ExitCode::from(code)
    }
}
