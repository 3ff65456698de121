//! OpenSentinel Console - Headless Entry Point
//!
//! Wires the session, aggregator, and topology model together and logs a
//! view-state summary each cycle. All visual rendering lives in the
//! map/front-end collaborator; this binary is the presentation model
//! running on its own.

use std::sync::Arc;

use sentinel_console_core::constants;
use sentinel_console_core::logic::aggregator::{
    run_refresh_loop, Aggregator, HttpNodeClient, NodeApiConfig,
};
use sentinel_console_core::logic::session::{MemorySession, SessionToken};
use sentinel_console_core::logic::topology::{load_from, StaticPeerRegistry};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    // Session lifecycle is owned outside the core; the headless console
    // takes its token from the environment.
    let session = Arc::new(MemorySession::new());
    match std::env::var("SENTINEL_API_TOKEN") {
        Ok(raw) if !raw.is_empty() => {
            session.set_token(SessionToken::new(raw));
            log::info!("Session token loaded from environment");
        }
        _ => {
            log::warn!("SENTINEL_API_TOKEN not set - refreshes will report unauthenticated");
        }
    }

    match load_from(&StaticPeerRegistry) {
        Ok(view) => {
            log::info!(
                "Topology loaded: {} + {} peers, {} links",
                view.sovereign().id,
                view.peers().len(),
                view.links().len()
            );
        }
        Err(e) => {
            log::error!("Topology roster rejected: {}", e);
        }
    }

    let config = NodeApiConfig::default();
    log::info!("Node backend: {}", config.base_url);

    let aggregator = Aggregator::new(HttpNodeClient::new(config), session);

    // Single cooperative scheduling context; nothing here needs worker threads.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    rt.block_on(async {
        run_refresh_loop(&aggregator, constants::get_refresh_interval()).await;
    });
}
