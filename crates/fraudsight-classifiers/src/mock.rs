//! Deterministic offline classifier
//!
//! Keyword-driven stand-in for the live provider, used in demos and tests
//! and as the zero-configuration default. Classification is a pure function
//! of the input text, so repeated calls always agree.

use async_trait::async_trait;
use fraudsight_core::{ClassifierLabel, Language, Result};

use crate::classifier::{Classification, TextClassifier};

const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("ponzi_scheme", &["guaranteed", "fixed return", "recruit others", "pyramid"]),
    ("pump_dump", &["target price", "coordinate", "buy together", "exit strategy"]),
    ("fake_ipo", &["pre-ipo", "firm allotment", "unlisted shares", "before listing"]),
    ("advance_fee", &["registration fee", "processing charges", "pay first", "token amount"]),
    ("fake_advisor", &["sebi registered", "certified expert", "government approved"]),
    ("clone_app", &["clone app", "duplicate", "mirror app", "fake app"]),
];

/// Keyword-table classifier with deterministic confidences
pub struct MockClassifier {
    name: String,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextClassifier for MockClassifier {
    async fn classify(&self, text: &str, _language: Language) -> Result<Classification> {
        let lowercase = text.to_lowercase();
        let mut categories = Vec::new();

        for (category, keywords) in CATEGORY_KEYWORDS {
            let matched: Vec<&str> = keywords
                .iter()
                .copied()
                .filter(|k| lowercase.contains(k))
                .collect();
            if !matched.is_empty() {
                // One keyword scores 75; each further keyword adds 15 up to
                // the 95 ceiling
                let confidence = (60 + 15 * matched.len()).min(95) as u8;
                tracing::debug!(
                    category,
                    confidence,
                    keywords = matched.len(),
                    "mock category matched"
                );
                categories.push(ClassifierLabel::new(
                    *category,
                    confidence,
                    format!("Detected keywords: {}", matched.join(", ")),
                ));
            }
        }

        Ok(Classification {
            categories,
            mock: true,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
