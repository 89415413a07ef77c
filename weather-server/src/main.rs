//! Binary crate for the weather gateway.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Initializing tracing
//! - Wiring configuration and the upstream provider into the router

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherProvider};

mod cli;
mod error;
mod handlers;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local .env is a development convenience; absence is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = cli::Cli::parse();
    let config = Config::from_env();
    let api_key_configured = config.api_key_configured();

    if !api_key_configured {
        tracing::warn!("OPENWEATHER_API_KEY is not set; upstream requests will be rejected");
    }

    let provider =
        OpenWeatherProvider::new(config).context("failed to build upstream HTTP client")?;

    let app = routes::router(routes::AppState {
        provider: Arc::new(provider),
        api_key_configured,
    });

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "weather gateway listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
