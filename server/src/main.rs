//! Prandaan Connect server
//!
//! Registers organ donors and recipients over a JSON API and keeps a ranked
//! list of compatible pairs.
//!
//! Usage:
//!   prandaan-server --port 3000
//!
//! All data is held in memory and lost on restart.

use anyhow::{Context, Result};
use clap::Parser;
use prandaan_registry::SharedRegistry;
use prandaan_server::build_router;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "prandaan-server")]
#[command(about = "Prandaan Connect donor/recipient matching API")]
struct Args {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP port
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Prandaan Connect starting...");
    let app = build_router(SharedRegistry::new());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("HTTP API listening on {}", local);

    println!("\n========================================");
    println!("  Prandaan Connect Running");
    println!("========================================");
    println!("  Donors:     http://{}/api/donors", local);
    println!("  Recipients: http://{}/api/recipients", local);
    println!("  Matches:    http://{}/api/matches", local);
    println!("  Stats:      http://{}/api/stats", local);
    println!("========================================\n");

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
