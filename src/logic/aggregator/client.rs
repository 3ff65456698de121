//! Node API Client
//!
//! HTTP client for the sovereign node's stats and records resources, plus
//! the wire-shape normalization that keeps malformed input away from the
//! classifiers.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use crate::api::view_state::{AggregateStats, RecordStatus, SurveillanceRecord};
use crate::constants;
use crate::logic::risk::rules::SCORE_MAX;
use crate::logic::session::SessionToken;

/// Read access to the node backend, one method per pull
pub trait NodeBackend: Send + Sync {
    fn fetch_stats(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<AggregateStats, FetchError>> + Send;

    fn fetch_records(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<Vec<SurveillanceRecord>, FetchError>> + Send;
}

/// Node backend configuration
#[derive(Debug, Clone)]
pub struct NodeApiConfig {
    pub base_url: String,
    pub records_limit: usize,
    pub timeout_seconds: u64,
}

impl Default for NodeApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_node_url(),
            records_limit: constants::get_records_limit(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Wire shapes - lenient on missing counters, strict on the governance
// status (a two-valued contract).

#[derive(Debug, Default, Deserialize)]
struct StatsWire {
    #[serde(default)]
    active_alerts: u64,
    #[serde(default)]
    total_cases: u64,
    #[serde(default)]
    locations_monitored: u64,
}

impl From<StatsWire> for AggregateStats {
    fn from(wire: StatsWire) -> Self {
        Self {
            active_alerts: wire.active_alerts,
            total_cases: wire.total_cases,
            locations_monitored: wire.locations_monitored,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecordWire {
    id: i64,
    #[serde(default)]
    disease: String,
    #[serde(default)]
    location: String,
    status: RecordStatus,
    #[serde(default)]
    risk_score: Option<f64>,
    #[serde(default)]
    source: String,
    #[serde(default)]
    weather_context: Option<String>,
}

impl RecordWire {
    /// Normalize one wire record into its display shape.
    ///
    /// The backend stores risk as a float; it is clamped to the 0-100
    /// scale and rounded. A weather context of "" or "None" means absent.
    fn normalize(self) -> SurveillanceRecord {
        let risk_score = self
            .risk_score
            .map(|raw| raw.clamp(0.0, SCORE_MAX as f64).round() as u8);
        let weather_context = self.weather_context.filter(|ctx| {
            let trimmed = ctx.trim();
            !trimmed.is_empty() && trimmed != "None"
        });

        SurveillanceRecord {
            id: self.id,
            disease: self.disease,
            location: self.location,
            status: self.status,
            risk_score,
            source: self.source,
            weather_context,
        }
    }
}

/// HTTP implementation of [`NodeBackend`] backed by reqwest
pub struct HttpNodeClient {
    config: NodeApiConfig,
    http_client: reqwest::Client,
}

impl HttpNodeClient {
    pub fn new(config: NodeApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &SessionToken,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token.as_str()))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| FetchError::Malformed(e.to_string()))
        } else {
            Err(FetchError::Status(response.status().as_u16()))
        }
    }
}

impl NodeBackend for HttpNodeClient {
    async fn fetch_stats(&self, token: &SessionToken) -> Result<AggregateStats, FetchError> {
        let wire: StatsWire = self.get_json("/stats", token).await?;
        Ok(wire.into())
    }

    async fn fetch_records(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<SurveillanceRecord>, FetchError> {
        let path = format!("/records?limit={}", self.config.records_limit);
        let wires: Vec<RecordWire> = self.get_json(&path, token).await?;
        Ok(wires.into_iter().map(RecordWire::normalize).collect())
    }
}

/// Per-pull failures; recovered locally by keeping the prior value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Malformed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Status(code) => write!(f, "server returned status {}", code),
            Self::Malformed(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let wire: StatsWire = serde_json::from_str(r#"{"active_alerts": 3}"#).unwrap();
        let stats = AggregateStats::from(wire);
        assert_eq!(stats.active_alerts, 3);
        assert_eq!(stats.total_cases, 0);
        assert_eq!(stats.locations_monitored, 0);

        let empty: StatsWire = serde_json::from_str("{}").unwrap();
        assert_eq!(AggregateStats::from(empty), AggregateStats::default());
    }

    #[test]
    fn test_stats_wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<StatsWire>("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_record_normalization_clamps_float_score() {
        let wire: RecordWire = serde_json::from_str(
            r#"{"id": 7, "disease": "Cholera", "location": "Nairobi",
                "status": "active", "risk_score": 93.7, "source": "DHIS2"}"#,
        )
        .unwrap();
        assert_eq!(wire.normalize().risk_score, Some(94));

        let wire: RecordWire = serde_json::from_str(
            r#"{"id": 8, "status": "active", "risk_score": 250.0}"#,
        )
        .unwrap();
        assert_eq!(wire.normalize().risk_score, Some(100));
    }

    #[test]
    fn test_record_weather_none_literal_is_absent() {
        let wire: RecordWire = serde_json::from_str(
            r#"{"id": 9, "status": "blocked", "weather_context": "None"}"#,
        )
        .unwrap();
        let record = wire.normalize();
        assert_eq!(record.weather_context, None);
        assert!(record.is_blocked());

        let wire: RecordWire = serde_json::from_str(
            r#"{"id": 10, "status": "active", "weather_context": "Heavy Rain (45mm)"}"#,
        )
        .unwrap();
        assert_eq!(
            wire.normalize().weather_context.as_deref(),
            Some("Heavy Rain (45mm)")
        );
    }

    #[test]
    fn test_unknown_status_is_malformed() {
        assert!(serde_json::from_str::<RecordWire>(
            r#"{"id": 11, "status": "quarantined"}"#
        )
        .is_err());
    }
}
