// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::report::PageReport;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /scrape`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScrapeQuery {
    /// Absolute http(s) URL of the page to analyse
    pub url: Option<String>,
}

/// Response of a completed scrape
#[derive(Debug, Serialize, ToSchema)]
pub struct ScrapeResponse {
    pub message: String,
    pub url: String,
    pub timestamp: String,
    pub results: Vec<PageReport>,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Current time as an RFC 3339 string with microseconds, e.g. `2026-10-15T08:30:00.123456Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
