// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Small query helpers over a parsed `scraper::Html` document.
//!
//! Missing elements and attributes read as empty strings; only an invalid selector is an error.

use crate::error::ScrapeError;
use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, Selector};

/// Parse a whole page with scripting disabled, so `<noscript>` children are elements
/// rather than raw text.
pub fn parse_page(body: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(Html::new_document(), opts).one(body)
}

/// Compile a CSS selector.
pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector {css:?}: {e}")))
}

/// All elements matching `css`, in document order.
pub fn select_all<'a>(document: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>, ScrapeError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).collect())
}

pub fn first<'a>(document: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).next())
}

pub fn count(document: &Html, css: &str) -> Result<usize, ScrapeError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).count())
}

/// Attribute value, empty if absent.
pub fn attr(element: &ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Attribute `name` of the first element matching `css`, empty if either is missing.
pub fn first_attr(document: &Html, css: &str, name: &str) -> Result<String, ScrapeError> {
    Ok(first(document, css)?
        .map(|element| attr(&element, name))
        .unwrap_or_default())
}

/// Concatenated descendant text, trimmed.
pub fn text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
