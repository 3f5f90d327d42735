//! razzie-api - Golden Raspberry Awards producer interval service
//!
//! Loads the nominee list into SQLite at startup and serves the award
//! interval and dashboard endpoints over HTTP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use razzie_common::config::{Config, ConfigOverrides};
use razzie_common::{db, ingest};
use razzie_api::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for razzie-api
#[derive(Parser, Debug)]
#[command(name = "razzie-api")]
#[command(about = "Golden Raspberry Awards producer interval API")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "RAZZIE_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "RAZZIE_PORT")]
    port: Option<u16>,

    /// Interface to bind to
    #[arg(long, env = "RAZZIE_BIND_ADDRESS")]
    bind_address: Option<String>,

    /// Nominee list CSV to load at startup
    #[arg(long, env = "RAZZIE_CSV")]
    csv: Option<PathBuf>,

    /// SQLite database file (in-memory when omitted)
    #[arg(long, env = "RAZZIE_DATABASE")]
    database: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "RAZZIE_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            bind_address: self.bind_address.clone(),
            csv_path: self.csv.clone(),
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is resolved before tracing so the configured level applies
    let (config, config_file) = Config::load(args.config.as_deref())?;
    let config = config.with_overrides(args.overrides());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("razzie_api={0},razzie_common={0},tower_http={0}", config.logging.level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting razzie-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_file {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let pool = db::open_database(config.database_path.as_deref())
        .await
        .context("Failed to open database")?;

    ingest::load_csv(&pool, &config.csv_path)
        .await
        .with_context(|| format!("Failed to load {}", config.csv_path.display()))?;

    let app = build_router(AppState::new(pool));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("razzie-api listening on http://{}", addr);
    info!("Producer intervals: http://{}/api/awards/producer-intervals", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
