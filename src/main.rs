// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seo_scraper::app::{create_router, AppState, VERSION};
use seo_scraper::models::settings::Settings;
use seo_scraper::services::fetcher::Fetcher;
use seo_scraper::services::scrape::{scrape_url, validate_url};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info,seo_scraper=debug,tower_http=info";

#[derive(Parser)]
#[command(name = "seo-scraper", version = VERSION, about = "Single-page SEO scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Overrides SEO_SCRAPER_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides SEO_SCRAPER_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Scrape one URL and print the report as JSON
    Scrape { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env().context("Invalid configuration")?;

    match cli.command {
        Some(Command::Scrape { url }) => scrape_once(&settings, &url).await,
        Some(Command::Serve { host, port }) => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            serve(settings).await
        }
        None => serve(settings).await,
    }
}

async fn serve(settings: Settings) -> Result<()> {
    let state = AppState::new(&settings)?;
    let app = create_router(state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        version = VERSION,
        fetch_timeout_secs = settings.fetch_timeout.as_secs(),
        "seo-scraper listening on {addr}"
    );

    axum::serve(listener, app).await.context("HTTP server failed")
}

async fn scrape_once(settings: &Settings, url: &str) -> Result<()> {
    let url = validate_url(Some(url))?;
    let fetcher = Fetcher::new(settings.fetch_timeout).context("Failed to build HTTP client")?;

    let report = scrape_url(&fetcher, url).await?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
