//! Risk Tier Thresholds
//!
//! Boundary constants for the score -> tier mapping. No classify logic here.

/// Above this score = Critical
pub const CRITICAL_FLOOR: u8 = 80;

/// Above this score (up to the critical floor) = Elevated
pub const ELEVATED_FLOOR: u8 = 50;

/// Upper bound of the score scale
pub const SCORE_MAX: u8 = 100;
