// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging utilities for keeping secrets out of log lines.

use url::Url;

/// Redact a URL for logging.
/// Drops credentials, query string and fragment: "https://example.com/path?token=x" ->
/// "https://example.com/path"
pub fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            // Setting these only fails for cannot-be-a-base URLs, which carry no credentials
            let _ = url.set_username("");
            let _ = url.set_password(None);
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        // Unparseable input may hold anything, keep only a prefix
        Err(_) => {
            let prefix: String = raw.chars().take(32).collect();
            format!("{prefix}***")
        }
    }
}
