//! OCR collaborator contract
//!
//! The analysis core never inspects image bytes itself; screenshots are
//! handed to an `OcrEngine` implementation and only the extracted text
//! flows onward. The mock engine validates the image container format and
//! returns a fixed sample so pipelines can run offline.

use async_trait::async_trait;
use fraudsight_core::{Error, Language, Result};
use serde::{Deserialize, Serialize};

/// Text recovered from an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrText {
    pub text: String,

    /// Engine confidence in [0, 100]
    pub confidence: u8,

    pub word_count: usize,
}

/// Capability interface for image-to-text extraction
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extract text from raw image bytes
    ///
    /// May fail with an explicit error, e.g. for an unsupported container
    /// format; callers treat failure as an unreadable upload, not as a
    /// scan-level fault.
    async fn extract_text(&self, image: &[u8], language: Language) -> Result<OcrText>;
}

/// Image container formats the mock engine accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
}

/// Sniff the container format from magic bytes
pub fn sniff_format(image: &[u8]) -> Option<ImageFormat> {
    if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageFormat::Jpeg)
    } else if image.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        Some(ImageFormat::Png)
    } else if image.starts_with(b"GIF8") {
        Some(ImageFormat::Gif)
    } else if image.len() >= 12 && image.starts_with(b"RIFF") && &image[8..12] == b"WEBP" {
        Some(ImageFormat::Webp)
    } else if image.starts_with(b"BM") {
        Some(ImageFormat::Bmp)
    } else {
        None
    }
}

const SAMPLE_TEXT: &str = "URGENT INVESTMENT OPPORTUNITY! Guaranteed 300% returns in 90 days. \
Pre-IPO shares available now, limited time offer. \
WhatsApp +91-9876543210, pay via UPI today.";

/// Offline OCR engine returning a fixed fraud-flavored sample
pub struct MockOcr;

#[async_trait]
impl OcrEngine for MockOcr {
    async fn extract_text(&self, image: &[u8], _language: Language) -> Result<OcrText> {
        let format = sniff_format(image)
            .ok_or_else(|| Error::ocr("unsupported or corrupt image format"))?;
        tracing::debug!(?format, bytes = image.len(), "mock ocr accepted image");

        Ok(OcrText {
            text: SAMPLE_TEXT.to_string(),
            confidence: 87,
            word_count: SAMPLE_TEXT.split_whitespace().count(),
        })
    }
}
