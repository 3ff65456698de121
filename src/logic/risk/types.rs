//! Risk Tier Types

use serde::{Deserialize, Serialize};

/// Risk classification of a record's numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    /// Baseline activity
    Nominal,
    /// Worth watching
    Elevated,
    /// Needs immediate operator attention
    Critical,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Nominal => "nominal",
            RiskTier::Elevated => "elevated",
            RiskTier::Critical => "critical",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Nominal => 0,
            RiskTier::Elevated => 1,
            RiskTier::Critical => 2,
        }
    }

    /// Badge color for the audit-log entry
    pub fn badge_color(&self) -> &'static str {
        match self {
            RiskTier::Nominal => "#10b981",  // Green
            RiskTier::Elevated => "#f59e0b", // Orange
            RiskTier::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
