//! FraudSight Core
//!
//! Core types, traits, and utilities shared across FraudSight components.
//!
//! This crate provides:
//! - Common types for red flags, extracted metadata, and risk assessments
//! - Error types and result handling
//! - The text normalizer backing case-insensitive rule matching

pub mod error;
pub mod normalize;
pub mod types;

pub use error::{Error, Result};
pub use normalize::NormalizedText;
pub use types::{
    ClassifierLabel, ExtractedMetadata, Language, RedFlag, RiskAssessment, RiskBand,
    ScoreBreakdown, Severity,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::normalize::NormalizedText;
    pub use crate::types::{
        ClassifierLabel, ExtractedMetadata, Language, RedFlag, RiskAssessment, RiskBand,
        ScoreBreakdown, Severity,
    };
}
