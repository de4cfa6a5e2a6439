//! Storekeep catalog server.
//!
//! Serves the category/product/user CRUD API and runs the low-stock scan
//! job on a fixed cadence in the background.
//!
//! Usage:
//!   storekeep-server --port 8080 --db storekeep.db

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use storekeep_catalog::{LogNotifier, StockScanner};
use storekeep_server::{AppState, build_router};
use storekeep_storage::DocumentStore;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "storekeep-server")]
#[command(about = "Catalog CRUD API with a low-stock scan job")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "storekeep.db")]
    db: PathBuf,

    /// Seconds between low-stock scans
    #[arg(long, default_value = "3600")]
    scan_interval: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("storekeep server starting...");
    let store =
        Arc::new(DocumentStore::open(&args.db).context("Failed to open document store")?);
    let state = Arc::new(AppState::new(store.clone()));

    // Low-stock scan on a fixed cadence. The sleep loop keeps successive
    // scans serialized: the next delay only starts once a scan finished.
    let scanner = StockScanner::new(store, Arc::new(LogNotifier));
    let interval = Duration::from_secs(args.scan_interval);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            match scanner.scan() {
                Ok(breaches) => info!("low-stock scan finished ({breaches} breaches)"),
                Err(err) => error!("low-stock scan failed: {err}"),
            }
        }
    });

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .context("Failed to bind HTTP port")?;
    info!(
        "listening on port {} (db: {}, scan every {}s)",
        args.port,
        args.db.display(),
        args.scan_interval
    );
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
