//! Standalone static server for the built portfolio.
//!
//! Run with: cargo run --features server --bin portfolio-server -- --dir target/dx/portfolio-site/release/web/public

use anyhow::Context;
use clap::Parser;

use portfolio_site::infrastructure::{build_router, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServerArgs::parse();
    args.validate()?;

    tracing::info!("Starting portfolio static server...");

    let app = build_router(&args);

    let addr = args.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}{}", addr, args.base_path);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
