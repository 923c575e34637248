// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration of the scraper service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interface the HTTP server binds to
    pub host: String,
    pub port: u16,
    /// Upper bound on a single page fetch
    pub fetch_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Read settings from `SEO_SCRAPER_HOST`, `SEO_SCRAPER_PORT` and `FETCH_TIMEOUT_SECS`.
    /// Unset variables fall back to defaults; malformed numbers are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("SEO_SCRAPER_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("SEO_SCRAPER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SEO_SCRAPER_PORT must be a valid port, got: {raw}"))?,
            None => defaults.port,
        };

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().with_context(|| {
                    format!("FETCH_TIMEOUT_SECS must be a whole number of seconds, got: {raw}")
                })?;
                if secs == 0 {
                    anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            host,
            port,
            fetch_timeout,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
