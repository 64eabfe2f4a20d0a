//! Advisor registry entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration status of an advisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorStatus {
    Active,
    Suspended,
    Cancelled,
}

impl AdvisorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A registered advisor, read-only to this crate
///
/// The registration number is the unique key across the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorRecord {
    pub name: String,
    pub registration_number: String,
    pub status: AdvisorStatus,
    pub firm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub certifications: Vec<String>,
    pub specializations: Vec<String>,
    pub registration_date: NaiveDate,
}

/// How a match was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Fuzzy,
}

/// A confidence-scored registry match, produced per query and not persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorMatch {
    pub advisor: AdvisorRecord,
    pub match_type: MatchType,
    pub confidence: u8,
}

/// Outcome of a credential verification lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialCheck {
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdvisorStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor: Option<AdvisorRecord>,
    pub message: String,
}
