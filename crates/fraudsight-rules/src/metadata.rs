//! Contact and channel artifact sweeps
//!
//! Runs independently of rule matching. Email, phone, and website patterns
//! scan the original text so artifacts keep their original form; social and
//! payment mentions are keyword membership over normalized text against
//! small fixed vocabularies.

use fraudsight_core::{Error, ExtractedMetadata, NormalizedText, Result};
use regex::Regex;

const SOCIAL_PLATFORMS: &[&str] = &["telegram", "whatsapp", "instagram", "facebook", "twitter"];

const PAYMENT_METHODS: &[&str] = &[
    "upi", "paytm", "googlepay", "phonepe", "paypal", "bitcoin", "crypto",
];

/// Pattern bank for artifact extraction
pub struct MetadataSweeper {
    email_regex: Regex,
    phone_regex: Regex,
    website_regex: Regex,
}

impl MetadataSweeper {
    /// Compile the artifact patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .map_err(|e| Error::internal(format!("failed to compile email regex: {}", e)))?,
            // Indian phone formats, with or without a +91 prefix
            phone_regex: Regex::new(
                r"(?:\+91[-.\s]?)?(?:\d{5}[-.\s]?\d{5}|\d{4}[-.\s]?\d{3}[-.\s]?\d{3}|\d{10})",
            )
            .map_err(|e| Error::internal(format!("failed to compile phone regex: {}", e)))?,
            website_regex: Regex::new(
                r"(?:https?://)?(?:www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:/[^\s]*)?",
            )
            .map_err(|e| Error::internal(format!("failed to compile website regex: {}", e)))?,
        })
    }

    /// Collect artifacts from the text, deduplicated in first-seen order
    pub fn sweep(&self, text: &NormalizedText<'_>) -> ExtractedMetadata {
        let mut meta = ExtractedMetadata::default();

        for m in self.email_regex.find_iter(text.original()) {
            push_unique(&mut meta.emails, m.as_str());
        }
        for m in self.phone_regex.find_iter(text.original()) {
            push_unique(&mut meta.phones, m.as_str());
        }
        for m in self.website_regex.find_iter(text.original()) {
            push_unique(&mut meta.websites, m.as_str());
        }

        for platform in SOCIAL_PLATFORMS {
            if text.normalized().contains(platform) {
                meta.social_media.push(platform.to_string());
            }
        }
        for method in PAYMENT_METHODS {
            if text.normalized().contains(method) {
                meta.payment_methods.push(method.to_string());
            }
        }

        tracing::debug!(
            emails = meta.emails.len(),
            phones = meta.phones.len(),
            websites = meta.websites.len(),
            social = meta.social_media.len(),
            payments = meta.payment_methods.len(),
            "metadata sweep complete"
        );

        meta
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
