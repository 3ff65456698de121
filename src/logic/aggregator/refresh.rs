//! Refresh Engine
//!
//! Pulls the two snapshots, folds them into the view-state with
//! last-write-wins-per-field sequencing, and exposes the loop helper the
//! console binary runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::time::sleep;

use crate::api::view_state::{AggregateStats, DashboardState, SurveillanceRecord};
use crate::logic::climate;
use crate::logic::session::SessionAccessor;

use super::client::{FetchError, NodeBackend};

/// Bound on the diagnostic error ring
const MAX_STATUS_ERRORS: usize = 20;

/// Outcome of one `refresh()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshResult {
    /// Both pulls landed and were applied
    Synced,
    /// At least one field kept a prior (or default) value
    Partial {
        stats_fresh: bool,
        records_fresh: bool,
    },
    /// No session token; nothing was requested
    Unauthenticated,
}

/// Feed diagnostics for the console status strip
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedStatus {
    pub last_refresh: Option<DateTime<Utc>>,
    pub refresh_count: u64,
    pub stats_pull_failures: u64,
    pub records_pull_failures: u64,
    pub errors: Vec<String>,
}

// View-state plus the sequence numbers of the refresh last applied to each
// field, guarded together so apply-or-discard is one atomic decision.
struct ViewCell {
    view: DashboardState,
    stats_seq: u64,
    records_seq: u64,
}

/// Assembles the dashboard view-state from authorized node pulls
pub struct Aggregator<B: NodeBackend> {
    backend: B,
    session: Arc<dyn SessionAccessor>,
    cell: RwLock<ViewCell>,
    status: RwLock<FeedStatus>,
    refresh_seq: AtomicU64,
    in_flight: AtomicU64,
}

impl<B: NodeBackend> Aggregator<B> {
    pub fn new(backend: B, session: Arc<dyn SessionAccessor>) -> Self {
        Self {
            backend,
            session,
            cell: RwLock::new(ViewCell {
                view: DashboardState::default(),
                stats_seq: 0,
                records_seq: 0,
            }),
            status: RwLock::new(FeedStatus::default()),
            refresh_seq: AtomicU64::new(0),
            in_flight: AtomicU64::new(0),
        }
    }

    /// Current view-state snapshot for the renderer
    pub fn view_state(&self) -> DashboardState {
        self.cell.read().view.clone()
    }

    /// Current feed diagnostics
    pub fn feed_status(&self) -> FeedStatus {
        self.status.read().clone()
    }

    /// Pull both snapshots and fold them into the view-state.
    ///
    /// The pulls run concurrently and degrade independently: a failed pull
    /// keeps that field's prior value and only flips its staleness flag.
    /// A result from a refresh that a newer one already overtook is
    /// discarded per field.
    pub async fn refresh(&self) -> RefreshResult {
        let token = match self.session.token() {
            Some(token) => token,
            None => {
                log::warn!("Refresh skipped: no session token");
                self.cell.write().view = DashboardState::default();
                return RefreshResult::Unauthenticated;
            }
        };

        let seq = self.refresh_seq.fetch_add(1, Ordering::Relaxed) + 1;

        self.in_flight.fetch_add(1, Ordering::Relaxed);
        self.cell.write().view.loading = true;

        let (stats_result, records_result) = tokio::join!(
            self.backend.fetch_stats(&token),
            self.backend.fetch_records(&token),
        );

        let stats_fresh = self.apply_stats(seq, stats_result);
        let records_fresh = self.apply_records(seq, records_result);

        if self.in_flight.fetch_sub(1, Ordering::Relaxed) == 1 {
            self.cell.write().view.loading = false;
        }

        {
            let mut status = self.status.write();
            status.last_refresh = Some(Utc::now());
            status.refresh_count += 1;
        }

        if stats_fresh && records_fresh {
            RefreshResult::Synced
        } else {
            RefreshResult::Partial {
                stats_fresh,
                records_fresh,
            }
        }
    }

    fn apply_stats(&self, seq: u64, result: Result<AggregateStats, FetchError>) -> bool {
        match result {
            Ok(stats) => {
                let mut cell = self.cell.write();
                if seq <= cell.stats_seq {
                    log::debug!("Discarding stats from superseded refresh #{}", seq);
                    return false;
                }
                cell.stats_seq = seq;
                cell.view.stats = stats;
                cell.view.stats_stale = false;
                true
            }
            Err(e) => {
                log::warn!("Stats pull failed: {}", e);
                {
                    let mut cell = self.cell.write();
                    if seq > cell.stats_seq {
                        cell.view.stats_stale = true;
                    }
                }
                let mut status = self.status.write();
                status.stats_pull_failures += 1;
                push_error(&mut status.errors, format!("stats: {}", e));
                false
            }
        }
    }

    fn apply_records(&self, seq: u64, result: Result<Vec<SurveillanceRecord>, FetchError>) -> bool {
        match result {
            Ok(records) => {
                let latest_climate_context =
                    records.first().and_then(|r| r.weather_context.clone());
                let is_adverse = climate::is_adverse(latest_climate_context.as_deref());

                let mut cell = self.cell.write();
                if seq <= cell.records_seq {
                    log::debug!("Discarding records from superseded refresh #{}", seq);
                    return false;
                }
                cell.records_seq = seq;
                cell.view.records = records;
                cell.view.latest_climate_context = latest_climate_context;
                cell.view.is_adverse_climate = is_adverse;
                cell.view.records_stale = false;
                true
            }
            Err(e) => {
                log::warn!("Records pull failed: {}", e);
                {
                    let mut cell = self.cell.write();
                    if seq > cell.records_seq {
                        cell.view.records_stale = true;
                    }
                }
                let mut status = self.status.write();
                status.records_pull_failures += 1;
                push_error(&mut status.errors, format!("records: {}", e));
                false
            }
        }
    }
}

fn push_error(errors: &mut Vec<String>, message: String) {
    if errors.len() == MAX_STATUS_ERRORS {
        errors.remove(0);
    }
    errors.push(message);
}

/// Run `refresh()` on a fixed interval, logging a console summary per tick.
///
/// One attempt per tick, no backoff; per-pull failures already degrade to
/// stale fields.
pub async fn run_refresh_loop<B: NodeBackend>(aggregator: &Aggregator<B>, interval_secs: u64) {
    log::info!("Starting refresh loop ({}s interval)...", interval_secs);

    loop {
        match aggregator.refresh().await {
            RefreshResult::Synced | RefreshResult::Partial { .. } => {
                let view = aggregator.view_state();
                log::info!(
                    "{} active alerts | {} cases | {} locations | climate: {}{}",
                    view.stats.active_alerts,
                    view.stats.total_cases,
                    view.stats.locations_monitored,
                    view.climate_label(),
                    if view.is_adverse_climate { " (adverse)" } else { "" },
                );
                if view.stats_stale || view.records_stale {
                    log::warn!(
                        "Stale panels (stats: {}, records: {})",
                        view.stats_stale,
                        view.records_stale
                    );
                }
                log::debug!(
                    "view-state: {}",
                    serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
                );
            }
            RefreshResult::Unauthenticated => {
                log::warn!("Not authenticated; waiting for a session token");
            }
        }

        sleep(Duration::from_secs(interval_secs)).await;
    }
}
