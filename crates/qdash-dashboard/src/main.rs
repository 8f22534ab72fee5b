//! qdash Dashboard binary entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use qdash_dashboard::{AppState, DashboardConfig, create_router, telemetry};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Example jobs created at startup unless configured otherwise.
const DEFAULT_SEED_JOBS: usize = 3;

/// Quantum job dashboard backend.
#[derive(Parser)]
#[command(name = "qdash-dashboard")]
#[command(version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "QDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides config and QDASH_BIND)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Number of example jobs to create at startup
    #[arg(long)]
    seed_jobs: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    let seed_jobs = cli
        .seed_jobs
        .or(config.seed_jobs)
        .unwrap_or(DEFAULT_SEED_JOBS);

    telemetry::init_tracing(&config.logging)?;

    let bind_addr = config.bind_address;
    let state = Arc::new(AppState::with_config(config));
    info!(
        backends = ?state.executors.available_backends(),
        timeout = ?state.config.execution_timeout(),
        "Executors registered"
    );
    state.seed_jobs(seed_jobs).await;

    let app = create_router(state);

    info!("Starting qdash dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
