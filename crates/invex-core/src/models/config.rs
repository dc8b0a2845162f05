//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::InvexError;

/// Main configuration for the invex pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length (in characters) to consider a PDF text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 20 }
    }
}

impl InvexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, InvexError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| InvexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), InvexError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| InvexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
