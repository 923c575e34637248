// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Anchor inventory: internal/external split, nofollow, domains, social and contact links.

use crate::error::ScrapeError;
use crate::models::report::{LinkMetrics, OutreachLinks};
use crate::services::html;
use scraper::{ElementRef, Html};
use std::collections::BTreeSet;
use url::{Position, Url};

const LINK_TEXT_LIMIT: usize = 20;
const INTERNAL_PAGE_LIMIT: usize = 20;

const SOCIAL_DOMAINS: [&str; 7] = [
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "tiktok.com",
    "pinterest.com",
];
const CONTACT_MARKERS: [&str; 5] = ["mailto:", "tel:", "contact", "about", "support"];

/// A link is internal when its href contains the scraped URL verbatim.
///
/// Relative hrefs are therefore never internal, and neither are absolute links to other
/// pages of the same site unless they extend the scraped URL.
pub fn is_internal(href: &str, page_url: &str) -> bool {
    href.contains(page_url)
}

pub fn is_external(href: &str, page_url: &str) -> bool {
    !is_internal(href, page_url) && href.starts_with("http")
}

/// `rel` link types are ASCII case-insensitive, so `NoFollow` counts too.
fn is_nofollow(anchor: &ElementRef) -> bool {
    anchor.value().attr("rel").is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("nofollow"))
    })
}

/// `[user[:password]@]host[:port]` of an absolute URL.
fn netloc(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    Some(parsed[Position::BeforeUsername..Position::AfterPort].to_string())
}

pub fn extract_links(document: &Html, page_url: &str) -> Result<LinkMetrics, ScrapeError> {
    let anchors = html::select_all(document, "a[href]")?;
    let hrefs: Vec<String> = anchors.iter().map(|a| html::attr(a, "href")).collect();

    let internal: Vec<&str> = hrefs
        .iter()
        .map(String::as_str)
        .filter(|href| is_internal(href, page_url))
        .collect();
    let external: Vec<&str> = hrefs
        .iter()
        .map(String::as_str)
        .filter(|href| is_external(href, page_url))
        .collect();

    let link_texts = anchors
        .iter()
        .map(html::text)
        .filter(|text| !text.is_empty())
        .take(LINK_TEXT_LIMIT)
        .collect();

    let external_domains: BTreeSet<String> = external.iter().filter_map(|h| netloc(h)).collect();

    let internal_pages = internal
        .iter()
        .filter(|href| !href.is_empty() && !href.starts_with('#') && !href.starts_with("mailto:"))
        .take(INTERNAL_PAGE_LIMIT)
        .map(|href| href.to_string())
        .collect();

    Ok(LinkMetrics {
        total_links: anchors.len(),
        internal_links: internal.len(),
        external_links: external.len(),
        link_texts,
        nofollow_links: anchors.iter().filter(|a| is_nofollow(a)).count(),
        external_domains: external_domains.into_iter().collect(),
        internal_pages,
    })
}

/// Lowercased hrefs pointing at social networks or contact/about pages.
pub fn extract_outreach(document: &Html) -> Result<OutreachLinks, ScrapeError> {
    let hrefs: Vec<String> = html::select_all(document, "a[href]")?
        .iter()
        .map(|a| html::attr(a, "href").to_lowercase())
        .collect();

    let matching = |markers: &[&str]| -> Vec<String> {
        hrefs
            .iter()
            .filter(|href| markers.iter().any(|m| href.contains(m)))
            .cloned()
            .collect()
    };

    Ok(OutreachLinks {
        social_media_links: matching(&SOCIAL_DOMAINS),
        contact_links: matching(&CONTACT_MARKERS),
    })
}
