//! album-directory - Album Directory Service
//!
//! In-memory album records over HTTP:
//! - GET  /albums
//! - POST /albums
//! - GET  /albums/:id

use std::path::PathBuf;

use album_common::config::{ConfigOverrides, ConfigResolver};
use album_directory::{build_router, AppState, MODULE_NAME};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for album-directory
#[derive(Parser, Debug)]
#[command(name = "album-directory")]
#[command(about = "In-memory album directory REST service")]
#[command(version)]
struct Args {
    /// Host to listen on [default: localhost]
    #[arg(long, env = "ALBUM_DIRECTORY_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "ALBUM_DIRECTORY_PORT")]
    port: Option<u16>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(short, long, env = "ALBUM_DIRECTORY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "ALBUM_DIRECTORY_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new(MODULE_NAME)
        .with_config_file(args.config.clone())
        .resolve(ConfigOverrides {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        })
        .context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Album Directory ({}) v{} [{}] built {} ({})",
        MODULE_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &args.config {
        info!("Config file: {}", path.display());
    }

    let state = AppState::seeded();
    info!("Album directory initialized with {} seed records", state.directory.len().await);

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("{} listening on http://{}", MODULE_NAME, addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
