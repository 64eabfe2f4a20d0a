//! Deterministic risk aggregation
//!
//! Combines fired rule weights with a bounded classifier boost into a
//! score clamped to [0, 100] and a categorical band. Pure functions over
//! their inputs; identical inputs always produce identical output.

use fraudsight_core::{ClassifierLabel, RedFlag, RiskAssessment, RiskBand, ScoreBreakdown, Severity};

/// Boost contributed by one label's confidence
fn boost_step(confidence: u8) -> u32 {
    if confidence >= 80 {
        15
    } else if confidence >= 60 {
        8
    } else if confidence >= 40 {
        3
    } else {
        0
    }
}

/// Bounded boost from classifier labels
///
/// Each label contributes a confidence-stepped amount; the sum is clamped
/// to [0, 25] so multiple corroborating signals are rewarded without any
/// classifier dominating the rule evidence.
pub fn classifier_boost(labels: &[ClassifierLabel]) -> u8 {
    let raw: u32 = labels.iter().map(|l| boost_step(l.confidence)).sum();
    let boost = raw.min(25) as u8;
    tracing::debug!(labels = labels.len(), raw, boost, "classifier boost computed");
    boost
}

/// Compose the risk assessment for one scan
pub fn assess(flags: &[RedFlag], labels: &[ClassifierLabel]) -> RiskAssessment {
    let base_score: u32 = flags.iter().map(|f| u32::from(f.weight)).sum();
    let boost = classifier_boost(labels);
    let score = (base_score + u32::from(boost)).min(100) as u8;
    let band = RiskBand::from_score(score);

    tracing::debug!(base_score, boost, score, band = band.as_str(), "risk assessed");

    RiskAssessment {
        score,
        band,
        breakdown: ScoreBreakdown {
            base_score,
            boost,
            flag_count: flags.len(),
            high_severity_count: flags.iter().filter(|f| f.severity == Severity::High).count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flag(code: &str, weight: u8, severity: Severity) -> RedFlag {
        RedFlag::new(code, weight, severity, vec!["evidence".to_string()])
    }

    fn label(confidence: u8) -> ClassifierLabel {
        ClassifierLabel::new("ponzi_scheme", confidence, "test")
    }

    #[test]
    fn test_boost_steps() {
        assert_eq!(classifier_boost(&[label(80)]), 15);
        assert_eq!(classifier_boost(&[label(79)]), 8);
        assert_eq!(classifier_boost(&[label(60)]), 8);
        assert_eq!(classifier_boost(&[label(59)]), 3);
        assert_eq!(classifier_boost(&[label(40)]), 3);
        assert_eq!(classifier_boost(&[label(39)]), 0);
        assert_eq!(classifier_boost(&[]), 0);
    }

    #[test]
    fn test_boost_saturates_at_25() {
        let labels = vec![label(90); 5];
        assert_eq!(classifier_boost(&labels), 25);
    }

    #[test]
    fn test_boost_accumulates_below_cap() {
        assert_eq!(classifier_boost(&[label(90), label(65)]), 23);
    }

    #[test]
    fn test_score_clamps_at_100() {
        let flags = vec![
            flag("A", 50, Severity::High),
            flag("B", 50, Severity::High),
            flag("C", 50, Severity::High),
        ];
        let assessment = assess(&flags, &[label(95)]);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.band, RiskBand::High);
        assert_eq!(assessment.breakdown.base_score, 150);
        assert_eq!(assessment.breakdown.boost, 15);
    }

    #[test]
    fn test_zero_inputs_score_zero() {
        let assessment = assess(&[], &[]);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.band, RiskBand::Low);
        assert_eq!(assessment.breakdown.flag_count, 0);
        assert_eq!(assessment.breakdown.high_severity_count, 0);
    }

    #[test]
    fn test_breakdown_counts() {
        let flags = vec![
            flag("A", 25, Severity::High),
            flag("B", 15, Severity::Medium),
            flag("C", 30, Severity::High),
        ];
        let assessment = assess(&flags, &[]);
        assert_eq!(assessment.score, 70);
        assert_eq!(assessment.breakdown.flag_count, 3);
        assert_eq!(assessment.breakdown.high_severity_count, 2);
    }

    #[test]
    fn test_band_boundaries_via_composition() {
        // 34 stays Low; the boost pushing past 34 flips to Medium
        let flags = vec![flag("A", 34, Severity::Medium)];
        assert_eq!(assess(&flags, &[]).band, RiskBand::Low);
        assert_eq!(assess(&flags, &[label(45)]).band, RiskBand::Medium);
    }

    #[test]
    fn test_deterministic() {
        let flags = vec![flag("A", 20, Severity::Medium)];
        let labels = vec![label(85), label(50)];
        assert_eq!(assess(&flags, &labels), assess(&flags, &labels));
    }

    proptest! {
        #[test]
        fn prop_score_always_bounded(
            weights in proptest::collection::vec(0u8..=50, 0..20),
            confidences in proptest::collection::vec(0u8..=100, 0..10),
        ) {
            let flags: Vec<RedFlag> = weights
                .iter()
                .map(|w| flag("X", *w, Severity::Low))
                .collect();
            let labels: Vec<ClassifierLabel> =
                confidences.iter().map(|c| label(*c)).collect();

            let assessment = assess(&flags, &labels);
            prop_assert!(assessment.score <= 100);
            prop_assert!(assessment.breakdown.boost <= 25);
            let expected = (assessment.breakdown.base_score
                + u32::from(assessment.breakdown.boost))
                .min(100) as u8;
            prop_assert_eq!(assessment.score, expected);
        }
    }
}
