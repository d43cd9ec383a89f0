//! # FoodieHub Storefront Library
//!
//! Headless orchestrator for the FoodieHub storefront. The rendering layer
//! runs this as a child process and talks to it over stdio.
//!
//! ## Module Organization
//! ```text
//! foodie_storefront/
//! ├── lib.rs          ◄─── You are here (startup & stdio loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── SharedStore, AppState, timers
//! │   ├── config.rs   ◄─── storefront.toml + FOODIE_* overrides
//! │   └── snapshot.rs ◄─── What goes back to the rendering layer
//! ├── commands/
//! │   ├── mod.rs      ◄─── dispatch(intent)
//! │   ├── cart.rs     ◄─── Cart + checkout timers
//! │   ├── session.rs  ◄─── Login / logout
//! │   ├── ui.rs       ◄─── Theme, auth prompt
//! │   └── catalog.rs  ◄─── Category fetch tasks
//! ├── protocol.rs     ◄─── Intent / Outbound wire types
//! ├── notify.rs       ◄─── Toasts and background change events
//! ├── pricing.rs      ◄─── Random placeholder prices
//! └── error.rs        ◄─── ApiError for intent results
//! ```
//!
//! ## I/O Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin  ── JSON intents, one per line                                   │
//! │  stdout ── JSON responses and events, one per line (single writer task) │
//! │  stderr ── tracing logs                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod notify;
pub mod pricing;
pub mod protocol;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use foodie_catalog::MealDbClient;

use error::AppError;
use notify::ChannelNotifier;
use pricing::RandomPrice;
use protocol::Outbound;
use state::{AppState, StorefrontConfig};

const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Runs the storefront until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,foodie=debug; override with RUST_LOG                │
/// │                                                                         │
/// │  2. Load Config ──────────────────────────────────────────────────────► │
/// │     • FOODIE_CONFIG path, else the platform config dir                  │
/// │                                                                         │
/// │  3. Build Catalog Client ─────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Initialize State ─────────────────────────────────────────────────► │
/// │     • session, cart, ui, catalog (in that order)                        │
/// │                                                                         │
/// │  5. Bootstrap Catalog ────────────────────────────────────────────────► │
/// │     • categories + default category items, in the background           │
/// │                                                                         │
/// │  6. Intent Loop ──────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting FoodieHub storefront");

    let config_path = std::env::var("FOODIE_CONFIG").ok().map(PathBuf::from);
    let config = StorefrontConfig::load(config_path)?;
    debug!(?config, "Config loaded");

    let client = MealDbClient::new(&config.catalog)?;
    info!(base_url = %client.base_url(), "Catalog client ready");

    let (tx, rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(write_outbound(rx));

    let prices = RandomPrice::from_settings(&config.storefront);
    let app = AppState::new(
        config,
        Arc::new(client),
        Box::new(prices),
        Arc::new(ChannelNotifier::new(tx.clone())),
    );
    info!("State initialized");

    let _ = commands::catalog::bootstrap(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outbound = commands::handle_line(&app, line);
        if tx.send(outbound).is_err() {
            warn!("Output writer stopped, exiting");
            break;
        }
    }

    info!("stdin closed, shutting down");
    drop(app);
    drop(tx);

    // Pending timer tasks still hold senders; give queued lines a moment.
    if tokio::time::timeout(SHUTDOWN_GRACE, writer).await.is_err() {
        debug!("Writer still busy at shutdown");
    }

    Ok(())
}

/// Single writer for stdout so responses and events never interleave.
async fn write_outbound(mut rx: mpsc::UnboundedReceiver<Outbound>) {
    let mut stdout = tokio::io::stdout();

    while let Some(outbound) = rx.recv().await {
        let mut line = outbound.to_line();
        line.push('\n');

        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            warn!(error = %e, "stdout write failed");
            break;
        }
        if let Err(e) = stdout.flush().await {
            warn!(error = %e, "stdout flush failed");
            break;
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=foodie=trace` - Show trace for foodie crates only
/// - Default: `info,foodie=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foodie=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
