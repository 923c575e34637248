// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Head metadata: title, meta description, social cards, canonical links, and the
//! technical tags (robots, viewport, charset, JSON-LD, tracking scripts).

use crate::error::ScrapeError;
use crate::models::report::{HeadTags, TechnicalTags};
use crate::services::html;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde_json::Value as JsonValue;

const TITLE_OPTIMAL_CHARS: std::ops::RangeInclusive<usize> = 50..=60;
const DESCRIPTION_OPTIMAL_CHARS: std::ops::RangeInclusive<usize> = 150..=160;

static GOOGLE_ANALYTICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"google-analytics|gtag|googletagmanager").expect("invalid analytics regex")
});
static FACEBOOK_PIXEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"facebook|fbevents").expect("invalid pixel regex"));

fn meta_name(document: &Html, name: &str) -> Result<String, ScrapeError> {
    html::first_attr(document, &format!(r#"meta[name="{name}"]"#), "content")
}

fn meta_property(document: &Html, property: &str) -> Result<String, ScrapeError> {
    html::first_attr(document, &format!(r#"meta[property="{property}"]"#), "content")
}

pub fn extract_head_tags(document: &Html) -> Result<HeadTags, ScrapeError> {
    let title = html::first(document, "title")?
        .map(|element| html::text(&element))
        .unwrap_or_default();
    let meta_description = meta_name(document, "description")?;

    let title_length = title.chars().count();
    let meta_description_length = meta_description.chars().count();

    let alternate_links = html::select_all(document, r#"link[rel~="alternate"]"#)?
        .iter()
        .map(|link| html::attr(link, "href"))
        .collect();

    Ok(HeadTags {
        title,
        title_length,
        title_optimal: TITLE_OPTIMAL_CHARS.contains(&title_length),
        meta_description,
        meta_description_length,
        meta_description_optimal: DESCRIPTION_OPTIMAL_CHARS.contains(&meta_description_length),
        meta_keywords: meta_name(document, "keywords")?,
        og_title: meta_property(document, "og:title")?,
        og_description: meta_property(document, "og:description")?,
        og_image: meta_property(document, "og:image")?,
        og_url: meta_property(document, "og:url")?,
        twitter_card: meta_name(document, "twitter:card")?,
        twitter_title: meta_name(document, "twitter:title")?,
        twitter_description: meta_name(document, "twitter:description")?,
        canonical_url: html::first_attr(document, r#"link[rel~="canonical"]"#, "href")?,
        alternate_links,
    })
}

pub fn extract_technical_tags(document: &Html) -> Result<TechnicalTags, ScrapeError> {
    let schema_blocks = html::select_all(document, r#"script[type="application/ld+json"]"#)?;
    let structured_data_content = schema_blocks
        .iter()
        .filter_map(|block| parse_json_ld(&block.text().collect::<String>()))
        .collect();

    let script_sources: Vec<String> = html::select_all(document, "script[src]")?
        .iter()
        .map(|script| html::attr(script, "src"))
        .collect();

    Ok(TechnicalTags {
        robots_directive: meta_name(document, "robots")?,
        viewport: meta_name(document, "viewport")?,
        language: html::first_attr(document, "html[lang]", "lang")?,
        charset: extract_charset(document)?,
        all_meta_tags: collect_meta_tags(document)?,
        schema_scripts: schema_blocks.len(),
        structured_data_content,
        google_analytics: script_sources
            .iter()
            .any(|src| GOOGLE_ANALYTICS_RE.is_match(src)),
        facebook_pixel: script_sources.iter().any(|src| FACEBOOK_PIXEL_RE.is_match(src)),
    })
}

/// Parse one JSON-LD block; blocks that are not valid JSON are skipped.
fn parse_json_ld(raw: &str) -> Option<JsonValue> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping unparseable JSON-LD block");
            None
        }
    }
}

/// `<meta charset>` first, then the `charset=` part of `<meta http-equiv="content-type">`.
fn extract_charset(document: &Html) -> Result<String, ScrapeError> {
    if let Some(meta) = html::first(document, "meta[charset]")? {
        return Ok(html::attr(&meta, "charset"));
    }

    let content = html::select_all(document, "meta[http-equiv]")?
        .into_iter()
        .find(|meta| {
            meta.value()
                .attr("http-equiv")
                .is_some_and(|v| v.eq_ignore_ascii_case("content-type"))
        })
        .map(|meta| html::attr(&meta, "content"));

    Ok(content
        .map(|c| c.rsplit("charset=").next().unwrap_or_default().to_string())
        .unwrap_or_default())
}

/// Every meta tag keyed by `name` (or `property` when there is no `name`); later tags win.
fn collect_meta_tags(document: &Html) -> Result<IndexMap<String, String>, ScrapeError> {
    let mut tags = IndexMap::new();
    for meta in html::select_all(document, "meta")? {
        let element = meta.value();
        let key = element
            .attr("name")
            .or_else(|| element.attr("property"))
            .unwrap_or_default();
        let content = element.attr("content").unwrap_or_default();
        if !key.is_empty() && !content.is_empty() {
            tags.insert(key.to_string(), content.to_string());
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description_optimal_ranges() {
        let title = "t".repeat(55);
        let description = "d".repeat(149);
        let markup = format!(
            r#"<html><head><title> {title} </title><meta name="description" content="{description}"></head></html>"#
        );
        let head = extract_head_tags(&Html::parse_document(&markup)).unwrap();

        assert_eq!(head.title_length, 55);
        assert!(head.title_optimal);
        assert_eq!(head.meta_description_length, 149);
        assert!(!head.meta_description_optimal);
    }

    #[test]
    fn test_title_length_counts_characters() {
        let markup = "<title>Привет</title>";
        let head = extract_head_tags(&Html::parse_document(markup)).unwrap();
        assert_eq!(head.title_length, 6);
    }

    #[test]
    fn test_social_and_canonical_tags() {
        let markup = r#"
            <head>
                <meta property="og:title" content="OG Title">
                <meta property="og:image" content="https://cdn.example.com/og.png">
                <meta name="twitter:card" content="summary_large_image">
                <link rel="canonical" href="https://example.com/page">
                <link rel="alternate" hreflang="de" href="https://example.com/de/page">
                <link rel="alternate" type="application/rss+xml" href="/feed.xml">
            </head>
        "#;
        let head = extract_head_tags(&Html::parse_document(markup)).unwrap();

        assert_eq!(head.og_title, "OG Title");
        assert_eq!(head.og_image, "https://cdn.example.com/og.png");
        assert_eq!(head.og_description, "");
        assert_eq!(head.twitter_card, "summary_large_image");
        assert_eq!(head.canonical_url, "https://example.com/page");
        assert_eq!(
            head.alternate_links,
            vec!["https://example.com/de/page", "/feed.xml"]
        );
    }

    #[test]
    fn test_missing_head_yields_empty_fields() {
        let head = extract_head_tags(&Html::parse_document("")).unwrap();
        assert_eq!(head, HeadTags::default());
    }

    #[test]
    fn test_charset_from_meta_charset() {
        let markup = r#"<meta charset="utf-8"><meta http-equiv="Content-Type" content="text/html; charset=latin1">"#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();
        assert_eq!(tags.charset, "utf-8");
    }

    #[test]
    fn test_charset_falls_back_to_http_equiv() {
        let markup = r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();
        assert_eq!(tags.charset, "ISO-8859-1");
    }

    #[test]
    fn test_language_from_html_element() {
        let markup = r#"<html lang="en-GB"><body></body></html>"#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();
        assert_eq!(tags.language, "en-GB");
    }

    #[test]
    fn test_all_meta_tags_prefers_name_and_overwrites_duplicates() {
        let markup = r#"
            <meta name="robots" content="index">
            <meta property="og:type" content="website">
            <meta name="empty" content="">
            <meta name="robots" content="noindex">
        "#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();

        assert_eq!(tags.all_meta_tags.len(), 2);
        let keys: Vec<&str> = tags.all_meta_tags.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["robots", "og:type"]);
        assert_eq!(tags.all_meta_tags.get("robots").unwrap(), "noindex");
        assert_eq!(tags.all_meta_tags.get("og:type").unwrap(), "website");
        assert_eq!(tags.robots_directive, "index");
    }

    #[test]
    fn test_invalid_json_ld_is_skipped() {
        let markup = r#"
            <script type="application/ld+json">{bad json</script>
            <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
        "#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();

        assert_eq!(tags.schema_scripts, 2);
        assert_eq!(tags.structured_data_content.len(), 1);
        assert_eq!(tags.structured_data_content[0]["name"], "Acme");
    }

    #[test]
    fn test_tracking_scripts_detected() {
        let markup = r#"
            <script async src="https://www.googletagmanager.com/gtag/js?id=G-1"></script>
            <script src="https://connect.facebook.net/en_US/fbevents.js"></script>
        "#;
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();
        assert!(tags.google_analytics);
        assert!(tags.facebook_pixel);
    }

    #[test]
    fn test_inline_tracking_snippet_is_not_detected() {
        let markup = "<script>gtag('config', 'G-1');</script>";
        let tags = extract_technical_tags(&Html::parse_document(markup)).unwrap();
        assert!(!tags.google_analytics);
    }
}
