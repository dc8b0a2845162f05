//! Ordered pattern matching.

use regex::Regex;
use tracing::trace;

use super::FieldExtractor;

/// Return group 1 of the first pattern that matches anywhere in `text`.
///
/// Patterns are tried in order and the first hit wins. The capture is
/// trimmed; a capture that is blank after trimming does not count as a hit.
pub fn find_first(patterns: &[Regex], text: &str) -> Option<String> {
    for (idx, pattern) in patterns.iter().enumerate() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let Some(value) = caps.get(1).map(|m| m.as_str().trim()) else {
            continue;
        };
        if value.is_empty() {
            trace!("Pattern {} matched a blank value", idx);
            continue;
        }

        trace!("Pattern {} matched {:?}", idx, value);
        return Some(value.to_string());
    }

    None
}

/// Extractor for one labeled text field backed by an ordered pattern table.
#[derive(Debug, Clone, Copy)]
pub struct PatternExtractor {
    field: &'static str,
    patterns: &'static [Regex],
}

impl PatternExtractor {
    pub fn new(field: &'static str, patterns: &'static [Regex]) -> Self {
        Self { field, patterns }
    }

    /// Name of the field this extractor fills.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl FieldExtractor for PatternExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let value = find_first(self.patterns, text);
        trace!("{}: {:?}", self.field, value);
        value
    }
}
