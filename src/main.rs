use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use nutrilens::analyzer::Analyzer;
use nutrilens::cli::parse_args;
use nutrilens::config::Config;
use nutrilens::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for API keys

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nutrilens=info")),
        )
        .init();

    let cli_args = parse_args();

    let config = Config::from_env().context("Failed to load configuration from environment")?;
    let analyzer = Arc::new(Analyzer::new(&config));

    let addr = format!("{}:{}", cli_args.host, cli_args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, server::router(analyzer))
        .await
        .context("Server exited with an error")?;

    Ok(())
}
