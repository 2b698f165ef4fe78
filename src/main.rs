//! eventboard server binary
//!
//! Loads `.env`, reads configuration from the environment, connects to
//! MongoDB, seeds sample data on first run, and serves HTTP until Ctrl+C
//! or SIGTERM.

use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eventboard::db::seed;
use eventboard::{run_server, AppConfig, ServerConfig, Store};

#[derive(Parser, Debug)]
#[command(
    name = "eventboard",
    version,
    about = "Event and venue listing server backed by MongoDB"
)]
struct Args {
    /// Port to bind the HTTP server to (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let store = Store::connect(&config.connection_uri(), &config.db_name).await?;

    // Probe the backend once so unavailability shows up in the logs instead
    // of only on the first request. A dead database is not fatal: requests
    // surface it as 503 until it comes back.
    match store.ping().await {
        Ok(()) => {
            tracing::info!(db = %config.db_name, "Connected to MongoDB");
            match seed::seed_if_empty(&store).await {
                Ok(true) => tracing::info!("Seeded sample events and venues"),
                Ok(false) => {}
                Err(err) => tracing::error!(error = %err, "Seeding failed"),
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "MongoDB unreachable at startup, continuing without seed");
        }
    }

    let server_config = ServerConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], config.port)),
        public_dir: config.public_dir.clone(),
    };
    run_server(store, server_config).await?;

    Ok(())
}
