// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! One scrape: validate the URL, fetch it, extract the report.

use crate::error::ScrapeError;
use crate::models::fetch::FetchRequest;
use crate::models::report::PageReport;
use crate::services::extractor::extract_report;
use crate::services::fetcher::Fetcher;
use crate::services::user_agent::random_user_agent;

pub const MISSING_URL_MESSAGE: &str = "URL parameter is required";
pub const INVALID_SCHEME_MESSAGE: &str = "URL must start with http:// or https://";

/// Accept only non-empty URLs starting with `http://` or `https://`.
pub fn validate_url(url: Option<&str>) -> Result<&str, ScrapeError> {
    let url = url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ScrapeError::Validation(MISSING_URL_MESSAGE.to_string()))?;

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ScrapeError::Validation(INVALID_SCHEME_MESSAGE.to_string()));
    }

    Ok(url)
}

/// Fetch `url` with a random user agent and build its report.
pub async fn scrape_url(fetcher: &Fetcher, url: &str) -> Result<PageReport, ScrapeError> {
    let request = FetchRequest {
        url: url.to_string(),
        user_agent: random_user_agent().to_string(),
    };

    let page = fetcher.fetch(request).await?;
    extract_report(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert_eq!(
            validate_url(Some("https://example.com")).unwrap(),
            "https://example.com"
        );
        assert_eq!(
            validate_url(Some("http://example.com/a?b=c")).unwrap(),
            "http://example.com/a?b=c"
        );
    }

    #[test]
    fn test_validate_url_missing_or_empty() {
        for input in [None, Some("")] {
            let err = validate_url(input).unwrap_err();
            assert_eq!(err.to_string(), MISSING_URL_MESSAGE);
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        for input in ["ftp://example.com", "example.com", "HTTPS://example.com", " http://x"] {
            let err = validate_url(Some(input)).unwrap_err();
            assert_eq!(err.to_string(), INVALID_SCHEME_MESSAGE);
        }
    }
}
