// Main entry point for the Mailguard API server

use anyhow::{Context, Result};
use clap::Parser;
use mg_extract::ExtractorConfig;
use mg_server::{build_app, build_state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mailguard", about = "Outbound email sensitive-data scanner")]
struct Args {
    /// Address to bind the listener to.
    #[arg(long, default_value = "0.0.0.0", env = "MAILGUARD_BIND")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000, env = "MAILGUARD_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mg_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let extractor_config = ExtractorConfig::from_env();
    if extractor_config.is_none() {
        tracing::info!("no extractor backend configured; analysis runs rule-only");
    }

    let state = build_state(extractor_config).context("Failed to build application state")?;
    let app = build_app(state);

    let addr = format!("{}:{}", args.bind, args.port);
    tracing::info!("Starting Mailguard API on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
