//! Aggregator Module - Snapshot Pulls & View-State Assembly
//!
//! This module handles:
//! - Authorized stats/records pulls from the node backend
//! - Wire-shape normalization at the fetch boundary
//! - View-state assembly with per-field last-write-wins sequencing
//! - The periodic refresh loop the console binary runs

pub mod client;
pub mod refresh;


pub use client::{FetchError, HttpNodeClient, NodeApiConfig, NodeBackend};
pub use refresh::{run_refresh_loop, Aggregator, FeedStatus, RefreshResult};
