//! Text normalization for case-insensitive rule matching
//!
//! Rule matching runs over a lower-cased, whitespace-collapsed view of the
//! input while evidence extraction re-scans the untouched original, so the
//! two views travel together.

/// A normalized view of an input text alongside the original
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    original: &'a str,
    normalized: String,
}

impl<'a> NormalizedText<'a> {
    /// Lower-case, collapse whitespace runs to single spaces, and trim
    pub fn new(text: &'a str) -> Self {
        let normalized = text
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            original: text,
            normalized,
        }
    }

    /// The untouched input, for evidence snippets
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// The lower-cased, whitespace-collapsed view
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True when the input was empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}
