//! Heuristic extraction of candidate advisor names from free text
//!
//! Contextual cue patterns pull capitalized name runs that sit next to a
//! title, an introducer word, or an honorific. This is a known-noisy
//! heuristic with no precision guarantee; generic capitalized nouns slip
//! through, which is why the excluded-term list is configurable.

use fraudsight_core::{Error, Result};
use regex::Regex;

const DEFAULT_EXCLUDED_TERMS: &[&str] = &[
    "Investment",
    "Trading",
    "Stock",
    "Market",
    "Financial",
    "Money",
];

// Cue words match any casing; the captured name run stays
// capitalization-shaped.
const CUE_PATTERNS: &[&str] = &[
    // Title before the name: "advisor Rajesh Kumar Sharma"
    r"(?i:advisor|adviser|consultant|expert|analyst)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    // Introducer before a 2-3 word name: "contact Priya Singh"
    r"(?i:by|from|contact)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})",
    // Honorific after the name: "Ramesh Gupta ji"
    r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?i:sir|madam|ji)",
];

/// Candidate-name extractor with a configurable excluded-term filter
pub struct NameExtractor {
    patterns: Vec<Regex>,
    excluded_terms: Vec<String>,
}

impl NameExtractor {
    /// Extractor with the default excluded-term list
    pub fn new() -> Result<Self> {
        Self::with_excluded_terms(
            DEFAULT_EXCLUDED_TERMS.iter().map(|t| t.to_string()).collect(),
        )
    }

    /// Extractor with a custom excluded-term list
    pub fn with_excluded_terms(excluded_terms: Vec<String>) -> Result<Self> {
        let patterns = CUE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::internal(format!("failed to compile name pattern: {}", e)))?;

        Ok(Self {
            patterns,
            excluded_terms,
        })
    }

    /// Pull candidate names, deduplicated in first-seen order
    ///
    /// Candidates are kept when longer than 3 and shorter than 50
    /// characters, then dropped when they contain an excluded term.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for pattern in &self.patterns {
            for captures in pattern.captures_iter(text) {
                if let Some(name) = captures.get(1) {
                    let name = name.as_str().trim();
                    let length = name.chars().count();
                    if length > 3 && length < 50 && !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }

        let filtered: Vec<String> = names
            .into_iter()
            .filter(|name| !self.excluded_terms.iter().any(|term| name.contains(term)))
            .collect();

        tracing::debug!(candidates = filtered.len(), "advisor name extraction complete");
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NameExtractor {
        NameExtractor::new().unwrap()
    }

    #[test]
    fn test_title_cue() {
        let names = extractor().extract("Our SEBI advisor Rajesh Kumar Sharma recommends this");
        assert_eq!(names, vec!["Rajesh Kumar Sharma"]);
    }

    #[test]
    fn test_introducer_cue() {
        let names = extractor().extract("Scheme promoted by Priya Singh for members");
        assert!(names.contains(&"Priya Singh".to_string()));
    }

    #[test]
    fn test_honorific_cue() {
        let names = extractor().extract("Please call Ramesh Gupta ji for details");
        assert!(names.contains(&"Ramesh Gupta".to_string()));
    }

    #[test]
    fn test_cue_word_casing_is_ignored() {
        let names = extractor().extract("CONTACT Amit Patel today");
        assert!(names.contains(&"Amit Patel".to_string()));
    }

    #[test]
    fn test_excluded_terms_filtered() {
        let names = extractor().extract("Learn from Stock Market experts today");
        assert!(names.is_empty());
    }

    #[test]
    fn test_custom_excluded_terms() {
        let custom = NameExtractor::with_excluded_terms(vec!["Gupta".to_string()]).unwrap();
        let names = custom.extract("Please call Ramesh Gupta ji for details");
        assert!(names.is_empty());
    }

    #[test]
    fn test_short_candidates_dropped() {
        let names = extractor().extract("advisor Raj offers tips");
        assert!(names.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let names = extractor().extract("advisor Priya Singh; contact Priya Singh now");
        assert_eq!(names, vec!["Priya Singh"]);
    }

    #[test]
    fn test_no_cues_yields_nothing() {
        assert!(extractor().extract("Nothing promotional here.").is_empty());
        assert!(extractor().extract("").is_empty());
    }
}
