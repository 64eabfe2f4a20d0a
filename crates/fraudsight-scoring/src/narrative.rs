//! Narrative explanation of a risk assessment
//!
//! The narrative groups fired flags by severity, quotes their evidence,
//! surfaces classifier insights when present, and closes with a
//! band-specific directive. Output is plain text for the orchestration
//! layer to render or persist.

use fraudsight_core::{ClassifierLabel, RedFlag, RiskBand, Severity};

/// Fixed sentence used when no flag fired
pub const NO_INDICATORS: &str = "No significant fraud indicators detected in the content.";

fn directive(band: RiskBand) -> &'static str {
    match band {
        RiskBand::High => {
            "Recommendation: High probability of fraudulent content. Avoid engagement and report if necessary."
        }
        RiskBand::Medium => {
            "Recommendation: Exercise caution. Verify credentials and seek professional advice before proceeding."
        }
        RiskBand::Low => {
            "Recommendation: Low risk detected, but always verify investment opportunities independently."
        }
    }
}

fn quoted(evidence: &[String]) -> String {
    evidence
        .iter()
        .map(|e| format!("\"{}\"", e))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the narrative for one scan
pub fn narrative(
    flags: &[RedFlag],
    score: u8,
    band: RiskBand,
    labels: &[ClassifierLabel],
) -> String {
    let mut out = format!("Risk assessment: {} (score {}/100)\n\n", band.as_str(), score);

    if flags.is_empty() {
        out.push_str(NO_INDICATORS);
        return out;
    }

    let sections = [
        (Severity::High, "High risk indicators:"),
        (Severity::Medium, "Medium risk indicators:"),
        (Severity::Low, "Low risk indicators:"),
    ];
    for (severity, heading) in sections {
        let group: Vec<&RedFlag> = flags.iter().filter(|f| f.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(heading);
        out.push('\n');
        for flag in group {
            out.push_str(&format!(
                "- {}: found {} (weight {})\n",
                flag.label,
                quoted(&flag.evidence),
                flag.weight
            ));
        }
        out.push('\n');
    }

    if !labels.is_empty() {
        out.push_str("Classifier analysis:\n");
        for label in labels {
            out.push_str(&format!(
                "- {}: {} (confidence {}%)\n",
                label.category, label.explanation, label.confidence
            ));
        }
        out.push('\n');
    }

    out.push_str(directive(band));
    out
}
