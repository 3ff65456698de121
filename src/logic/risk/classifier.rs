//! Risk Classifier
//!
//! Pure score -> tier mapping. A single ordered comparison chain, first
//! match wins, so exactly one tier is produced per score.

use super::rules::{CRITICAL_FLOOR, ELEVATED_FLOOR};
use super::types::RiskTier;

/// Classify a 0-100 risk score into its display tier
pub fn classify(score: u8) -> RiskTier {
    if score > CRITICAL_FLOOR {
        RiskTier::Critical
    } else if score > ELEVATED_FLOOR {
        RiskTier::Elevated
    } else {
        RiskTier::Nominal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_scores() {
        assert_eq!(classify(81), RiskTier::Critical);
        assert_eq!(classify(80), RiskTier::Elevated);
        assert_eq!(classify(51), RiskTier::Elevated);
        assert_eq!(classify(50), RiskTier::Nominal);
        assert_eq!(classify(0), RiskTier::Nominal);
        assert_eq!(classify(100), RiskTier::Critical);
    }

    #[test]
    fn test_every_score_gets_exactly_one_tier() {
        for score in 0..=100u8 {
            let expected = if score > 80 {
                RiskTier::Critical
            } else if score > 50 {
                RiskTier::Elevated
            } else {
                RiskTier::Nominal
            };
            assert_eq!(classify(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_tier_ordering_follows_severity() {
        assert!(RiskTier::Critical > RiskTier::Elevated);
        assert!(RiskTier::Elevated > RiskTier::Nominal);
        assert_eq!(RiskTier::Critical.severity_level(), 2);
    }
}
