// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Request to fetch a single page
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// The URL to fetch
    pub url: String,
    /// User agent string to send with the request
    pub user_agent: String,
}

/// Raw response of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL as requested (not the post-redirect URL)
    pub url: String,
    pub user_agent: String,
    pub status_code: u16,
    /// `Content-Type` header value, empty if absent
    pub content_type: String,
    /// Length of the decoded body in bytes
    pub content_length: usize,
    /// Seconds from sending the request until the response headers arrived
    pub load_time: f64,
    pub headers: HeaderMap,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Header value as a string, empty when missing or not valid UTF-8.
    pub fn header(&self, name: &str) -> String {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}
