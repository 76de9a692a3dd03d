//! hubmock-server - Mock HUB REST endpoints
//!
//! Disposable stand-in for the HUB chart-of-accounts search and master-data
//! import endpoints, used by integration test suites to exercise every
//! outcome variant on demand via the `mode` query parameter.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hubmock_common::config;
use hubmock_server::build_router;

#[derive(Debug, Parser)]
#[command(
    name = "hubmock-server",
    about = "Mock HUB endpoints (COA search + master-data imports) for integration testing"
)]
struct Args {
    /// Listen port (overrides the HUBMOCK_PORT environment variable; default 4000)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting HUB Mock Server (hubmock-server) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let port = config::resolve_port(args.port)?;

    let app = build_router();

    // Bind all interfaces: the mock is reached from other teams' test hosts
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("hubmock-server listening on http://0.0.0.0:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
