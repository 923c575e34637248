// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::ScrapeError;
use crate::models::fetch::{FetchRequest, FetchedPage};
use crate::services::logging::redact_url;
use chrono::Utc;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, CONTENT_TYPE, USER_AGENT};
use std::error::Error as _;
use std::time::{Duration, Instant};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

/// HTTP client for single-page fetches.
///
/// `Accept-Encoding: gzip, deflate` is sent by the client's decoders, which also
/// decompress the body before it is measured and parsed.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one page. Network errors, timeouts and non-2xx statuses are all `FetchError`s.
    pub async fn fetch(&self, request: FetchRequest) -> Result<FetchedPage, ScrapeError> {
        let fetched_at = Utc::now();
        let started = Instant::now();

        let response = self
            .client
            .get(&request.url)
            .header(USER_AGENT, request.user_agent.as_str())
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
            .header(CONNECTION, "keep-alive")
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(&request.url, self.describe(&e)))?;

        let load_time = started.elapsed().as_secs_f64();
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(
                &request.url,
                format!("HTTP status {status}"),
            ));
        }

        let headers = response.headers().clone();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::fetch(&request.url, self.describe(&e)))?;

        tracing::info!(
            url = %redact_url(&request.url),
            status = status.as_u16(),
            bytes = body.len(),
            load_time,
            "Fetched page"
        );

        Ok(FetchedPage {
            url: request.url,
            user_agent: request.user_agent,
            status_code: status.as_u16(),
            content_type,
            content_length: body.len(),
            load_time,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
            fetched_at,
        })
    }

    /// Error text including the underlying causes, e.g.
    /// `error sending request for url (..): client error (Connect): tcp connect error: ..`.
    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            return format!("request timed out after {}s", self.timeout.as_secs_f64());
        }
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
