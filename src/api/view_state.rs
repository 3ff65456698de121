//! Console View-State Contracts
//!
//! The aggregator's best-known snapshot as consumed by the renderer.
//! Replaced wholesale per refresh, never mutated in place.

use serde::{Deserialize, Serialize};

use crate::logic::climate;
use crate::logic::risk::{classify, RiskTier};

/// Snapshot counters for the KPI panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub active_alerts: u64,
    pub total_cases: u64,
    pub locations_monitored: u64,
}

/// Governance status of a surveillance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Live case
    Active,
    /// Suppressed by governance policy; shown flagged in the audit log
    Blocked,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Blocked => "blocked",
        }
    }
}

/// One ingestion event from the node's audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceRecord {
    pub id: i64,
    pub disease: String,
    pub location: String,
    pub status: RecordStatus,
    /// 0-100; meaningful only while `status` is active
    pub risk_score: Option<u8>,
    /// Origin system/agent, e.g. "DHIS2" (with the audit note appended)
    pub source: String,
    pub weather_context: Option<String>,
}

impl SurveillanceRecord {
    /// Risk badge for the audit-log entry.
    ///
    /// Only active records carry a badge; a blocked record is flagged by
    /// its status alone, whatever score it was ingested with.
    pub fn risk_badge(&self) -> Option<RiskTier> {
        match self.status {
            RecordStatus::Active => self.risk_score.map(classify),
            RecordStatus::Blocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == RecordStatus::Blocked
    }
}

/// The aggregator's current snapshot, exposed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub stats: AggregateStats,
    /// Most-recent-first, as delivered by the backend
    pub records: Vec<SurveillanceRecord>,
    /// True only while a refresh is in flight
    pub loading: bool,
    /// Weather context of the most recent record, if any
    pub latest_climate_context: Option<String>,
    pub is_adverse_climate: bool,
    /// The stats panel is showing a default or previous value
    pub stats_stale: bool,
    /// The audit log is showing a previous value
    pub records_stale: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        // Until a pull lands, both panels show their muted placeholder.
        Self {
            stats: AggregateStats::default(),
            records: Vec::new(),
            loading: false,
            latest_climate_context: None,
            is_adverse_climate: false,
            stats_stale: true,
            records_stale: true,
        }
    }
}

impl DashboardState {
    /// Label for the climate KPI card ("No Data" when nothing is known)
    pub fn climate_label(&self) -> &str {
        self.latest_climate_context
            .as_deref()
            .unwrap_or(climate::NO_DATA)
    }
}
