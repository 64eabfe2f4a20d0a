//! Prioritized action recommendations
//!
//! Band-general advice first, then statements triggered by specific flag
//! codes and extracted metadata. The list is additive and deterministic;
//! each trigger contributes its statement at most once.

use fraudsight_core::{ExtractedMetadata, RedFlag, RiskBand};

fn band_advice(band: RiskBand) -> [&'static str; 3] {
    match band {
        RiskBand::High => [
            "Do not invest or share personal information",
            "Report to cybercrime authorities if contacted",
            "Block the sender or source immediately",
        ],
        RiskBand::Medium => [
            "Verify advisor credentials with the securities regulator",
            "Consult with registered financial advisors",
            "Request proper documentation and disclosures",
        ],
        RiskBand::Low => [
            "Still verify credentials independently",
            "Ensure proper documentation",
            "Consider a diversified investment approach",
        ],
    }
}

/// Build the recommendation list for one scan
pub fn recommendations(
    flags: &[RedFlag],
    band: RiskBand,
    metadata: &ExtractedMetadata,
) -> Vec<String> {
    let mut out: Vec<String> = band_advice(band).iter().map(|s| s.to_string()).collect();

    let fired = |code: &str| flags.iter().any(|f| f.code == code);

    if fired("GUARANTEED_RETURNS") {
        out.push("No legitimate investment guarantees returns".to_string());
    }
    if fired("UNOFFICIAL_CHANNELS") {
        out.push("Avoid investment advice from social media groups".to_string());
    }
    if fired("ADVANCE_PAYMENT") {
        out.push("Never pay upfront fees for investment opportunities".to_string());
    }
    if !metadata.emails.is_empty() {
        out.push("Verify email domains and sender authenticity".to_string());
    }

    out
}
