// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Typed errors for a scrape call.

use thiserror::Error;

/// Errors that abort a scrape. No partial report is ever produced alongside one.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The requested URL is missing or not an http(s) URL
    #[error("{0}")]
    Validation(String),

    /// Network failure, timeout, or non-2xx response
    #[error("Failed to scrape {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The document could not be queried
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

impl ScrapeError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the caller, rather than the target site, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScrapeError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_includes_url_and_cause() {
        let err = ScrapeError::fetch("https://example.com/", "HTTP status 404 Not Found");
        assert_eq!(
            err.to_string(),
            "Failed to scrape https://example.com/: HTTP status 404 Not Found"
        );
    }

    #[test]
    fn test_only_validation_is_client_error() {
        assert!(ScrapeError::Validation("bad".to_string()).is_client_error());
        assert!(!ScrapeError::fetch("u", "x").is_client_error());
        assert!(!ScrapeError::Parse("x".to_string()).is_client_error());
    }
}
