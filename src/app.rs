// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::error::ScrapeError;
use crate::models::report::PageReport;
use crate::models::scrape::{
    timestamp_now, ErrorResponse, HealthResponse, MessageResponse, ScrapeQuery, ScrapeResponse,
};
use crate::models::settings::Settings;
use crate::models::version::VersionResponse;
use crate::services::fetcher::Fetcher;
use crate::services::logging::redact_url;
use crate::services::scrape::{scrape_url, validate_url};
use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SEO_SCRAPER_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SEO_SCRAPER_VERSION");

pub const SERVICE_NAME: &str = "seo-scraper";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// One pooled HTTP client shared by all concurrent scrapes.
    pub fetcher: Arc<Fetcher>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(settings.fetch_timeout).context("Failed to build HTTP client")?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
        })
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "SEO Scraper API is running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Liveness probe", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp_now(),
    })
}

#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Build version", body = VersionResponse))
)]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/scrape",
    params(ScrapeQuery),
    responses(
        (status = 200, description = "SEO report for the page", body = ScrapeResponse),
        (status = 400, description = "Missing or non-http(s) URL", body = ErrorResponse),
        (status = 500, description = "Fetch or extraction failed", body = ErrorResponse)
    )
)]
pub async fn scrape_handler(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Result<Json<ScrapeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = validate_url(query.url.as_deref()).map_err(error_response)?;

    tracing::info!(url = %redact_url(url), "Scraping page");
    let report = scrape_url(&state.fetcher, url)
        .await
        .map_err(error_response)?;

    Ok(Json(ScrapeResponse {
        message: format!("Scraping completed for {url}"),
        url: url.to_string(),
        timestamp: timestamp_now(),
        results: vec![report],
    }))
}

/// Map a scrape failure to its HTTP status and `{"detail": ..}` body.
fn error_response(err: ScrapeError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_client_error() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        );
    }

    tracing::warn!(error = %err, "Scrape failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: format!("Scraping failed: {err}"),
        }),
    )
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(root_handler, health_handler, version_handler, scrape_handler),
    components(schemas(
        MessageResponse,
        HealthResponse,
        VersionResponse,
        ScrapeResponse,
        ErrorResponse,
        PageReport
    )),
    tags((name = "seo-scraper", description = "Single-page SEO analysis"))
)]
pub struct ApiDoc;

/// Build the Axum application router, including Swagger UI at `/docs`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/scrape", get(scrape_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
