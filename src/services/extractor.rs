// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Assemble a [`PageReport`] from a fetched page.

use crate::error::ScrapeError;
use crate::models::fetch::FetchedPage;
use crate::models::report::{
    AssetMetrics, PageReport, PerformanceSignals, SecurityHeaders, ServerInfo,
};
use crate::services::{content, html, links, media, scoring, tags};
use chrono::SecondsFormat;

/// Parse the page body and compute every report field.
///
/// Each field group is computed independently from the parsed document; the score and
/// recommendations are derived last from the assembled report.
pub fn extract_report(page: &FetchedPage) -> Result<PageReport, ScrapeError> {
    let document = html::parse_page(&page.body);

    let technical = tags::extract_technical_tags(&document)?;
    let assets = media::extract_assets(&document)?;
    let performance = performance_signals(page, &technical.viewport, &assets);

    let mut report = PageReport {
        url: page.url.clone(),
        timestamp: page.fetched_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        user_agent: page.user_agent.clone(),
        status_code: page.status_code,
        content_type: page.content_type.clone(),
        content_length: page.content_length,
        load_time: page.load_time,
        head: tags::extract_head_tags(&document)?,
        headings: content::extract_headings(&document)?,
        content: content::extract_content(&document)?,
        links: links::extract_links(&document, &page.url)?,
        images: media::extract_images(&document)?,
        media: media::extract_media(&document)?,
        structure: content::extract_structure(&document)?,
        assets,
        technical,
        outreach: links::extract_outreach(&document)?,
        performance,
        seo_score: 0,
        seo_recommendations: Vec::new(),
    };
    report.seo_score = scoring::seo_score(&report);
    report.seo_recommendations = scoring::recommendations(&report);

    tracing::debug!(
        words = report.content.total_words,
        links = report.links.total_links,
        images = report.images.total_images,
        seo_score = report.seo_score,
        "Extracted page report"
    );

    Ok(report)
}

fn performance_signals(
    page: &FetchedPage,
    viewport: &str,
    assets: &AssetMetrics,
) -> PerformanceSignals {
    let has_minified_css = assets.css_files.iter().any(|href| href.contains("min.css"));
    let has_minified_js = assets.js_files.iter().any(|src| src.contains("min.js"));

    PerformanceSignals {
        has_ssl: page.url.starts_with("https://"),
        mobile_friendly: !viewport.is_empty(),
        has_minified_css,
        has_minified_js,
        has_compressed_resources: has_minified_css || has_minified_js,
        security_headers: SecurityHeaders {
            x_frame_options: page.header("x-frame-options"),
            x_content_type_options: page.header("x-content-type-options"),
            x_xss_protection: page.header("x-xss-protection"),
            strict_transport_security: page.header("strict-transport-security"),
            content_security_policy: page.header("content-security-policy"),
        },
        server_info: ServerInfo {
            server: page.header("server"),
            x_powered_by: page.header("x-powered-by"),
            cache_control: page.header("cache-control"),
            expires: page.header("expires"),
            last_modified: page.header("last-modified"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use reqwest::header::{HeaderMap, HeaderValue};

    fn page(url: &str, body: &str) -> FetchedPage {
        let mut headers = HeaderMap::new();
        headers.insert("server", HeaderValue::from_static("nginx"));
        headers.insert(
            "strict-transport-security",
            HeaderValue::from_static("max-age=63072000"),
        );
        FetchedPage {
            url: url.to_string(),
            user_agent: "test-agent".to_string(),
            status_code: 200,
            content_type: "text/html; charset=utf-8".to_string(),
            content_length: body.len(),
            load_time: 0.25,
            headers,
            body: body.to_string(),
            fetched_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_response_fields_are_copied() {
        let report = extract_report(&page("https://example.com", "<p>hi</p>")).unwrap();

        assert_eq!(report.url, "https://example.com");
        assert_eq!(report.timestamp, "2026-01-02T03:04:05.000000Z");
        assert_eq!(report.user_agent, "test-agent");
        assert_eq!(report.status_code, 200);
        assert_eq!(report.content_length, 9);
        assert_eq!(report.load_time, 0.25);
    }

    #[test]
    fn test_performance_signals_from_url_headers_and_assets() {
        let body = r#"
            <head>
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <link rel="stylesheet" href="/app.min.css">
                <script src="/app.js"></script>
            </head>
        "#;
        let report = extract_report(&page("https://example.com", body)).unwrap();
        let performance = &report.performance;

        assert!(performance.has_ssl);
        assert!(performance.mobile_friendly);
        assert!(performance.has_minified_css);
        assert!(!performance.has_minified_js);
        assert!(performance.has_compressed_resources);
        assert_eq!(performance.server_info.server, "nginx");
        assert_eq!(performance.server_info.x_powered_by, "");
        assert_eq!(
            performance.security_headers.strict_transport_security,
            "max-age=63072000"
        );
    }

    #[test]
    fn test_plain_http_is_not_ssl() {
        let report = extract_report(&page("http://example.com", "")).unwrap();
        assert!(!report.performance.has_ssl);
        assert!(!report.performance.mobile_friendly);
    }

    #[test]
    fn test_two_h1_tags_are_flagged() {
        let body = "<h1>One</h1><h1>Two</h1>";
        let report = extract_report(&page("https://example.com", body)).unwrap();

        assert_eq!(report.headings.h1_count, 2);
        assert!(report
            .seo_recommendations
            .contains(&"Multiple H1 tags found".to_string()));
        assert!(!report
            .seo_recommendations
            .contains(&"Missing H1 tag".to_string()));
    }

    #[test]
    fn test_page_without_images() {
        let report = extract_report(&page("https://example.com", "<p>text</p>")).unwrap();

        assert_eq!(report.images.total_images, 0);
        assert_eq!(report.images.images_without_alt, 0);
        assert!(report.images.image_details.is_empty());
        assert!(!report
            .seo_recommendations
            .iter()
            .any(|r| r.ends_with("images missing alt text")));
    }

    #[test]
    fn test_malformed_json_ld_is_counted_but_skipped() {
        let body = r#"<script type="application/ld+json">{not json</script>"#;
        let report = extract_report(&page("https://example.com", body)).unwrap();

        assert_eq!(report.technical.schema_scripts, 1);
        assert!(report.technical.structured_data_content.is_empty());
    }

    #[test]
    fn test_tag_manager_noscript_iframe_is_markup_not_words() {
        let body = r#"<p>Hello world.</p><noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-ABC" height="0" width="0"></iframe></noscript>"#;
        let report = extract_report(&page("https://example.com", body)).unwrap();

        assert_eq!(report.content.total_words, 2);
        assert_eq!(report.content.unique_words, 2);
        assert!(!report
            .content
            .top_keywords
            .iter()
            .any(|(word, _)| word == "iframe" || word == "googletagmanager"));
        assert_eq!(report.media.video_count, 1);
        assert_eq!(
            report.media.video_sources,
            vec!["https://www.googletagmanager.com/ns.html?id=GTM-ABC"]
        );
    }

    #[test]
    fn test_pixel_noscript_image_is_counted() {
        let body = r#"<p>Hello world.</p><noscript><img height="1" width="1" style="display:none" src="https://www.facebook.com/tr?id=1&ev=PageView&noscript=1"/></noscript>"#;
        let report = extract_report(&page("https://example.com", body)).unwrap();

        assert_eq!(report.content.total_words, 2);
        assert_eq!(report.images.total_images, 1);
        assert_eq!(report.images.images_without_alt, 1);
    }

    #[test]
    fn test_same_page_gives_same_report() {
        let body = r#"
            <html lang="en"><head><title>Stable</title></head>
            <body><p>Words repeat, words repeat. Again!</p><a href="https://other.org">o</a></body>
            </html>
        "#;
        let fetched = page("https://example.com", body);

        assert_eq!(extract_report(&fetched).unwrap(), extract_report(&fetched).unwrap());
    }

    #[test]
    fn test_empty_document_still_scores() {
        let report = extract_report(&page("https://example.com", "")).unwrap();

        assert!(report.seo_score <= 100);
        assert_eq!(report.content.total_words, 0);
        assert_eq!(report.head.title, "");
        assert!(report
            .seo_recommendations
            .contains(&"Missing page title".to_string()));
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = extract_report(&page("https://example.com", "<title>T</title>")).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();

        for field in [
            "title",
            "h1_count",
            "total_words",
            "keyword_density",
            "internal_links",
            "images_with_alt",
            "video_count",
            "form_count",
            "css_files",
            "charset",
            "social_media_links",
            "has_ssl",
            "security_headers",
            "seo_score",
            "seo_recommendations",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert!(!object.contains_key("head"));
        assert_eq!(json["server_info"]["server"], "nginx");
    }
}
