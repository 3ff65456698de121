//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! To point the console at a different node backend, only edit this file.

/// Default node backend URL
///
/// This is the fallback URL when no environment variable is set.
/// A locally running sovereign node serves its API on port 8000.
pub const DEFAULT_NODE_URL: &str = "http://localhost:8000";

/// Default number of audit-log records pulled per refresh
pub const DEFAULT_RECORDS_LIMIT: usize = 10;

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default refresh interval for the console loop (seconds)
pub const DEFAULT_REFRESH_INTERVAL: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "OpenSentinel Console";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get node backend URL from environment or use default
pub fn get_node_url() -> String {
    std::env::var("SENTINEL_NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string())
}

/// Get records-pull limit from environment or use default
pub fn get_records_limit() -> usize {
    std::env::var("SENTINEL_RECORDS_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RECORDS_LIMIT)
}

/// Get refresh interval from environment or use default
pub fn get_refresh_interval() -> u64 {
    std::env::var("SENTINEL_REFRESH_INTERVAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_INTERVAL)
}
