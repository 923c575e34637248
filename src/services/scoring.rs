// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Composite SEO score and recommendations derived from a finished report.

use crate::models::report::PageReport;

pub const MAX_SCORE: u32 = 100;

/// Weighted checklist, capped at [`MAX_SCORE`].
pub fn seo_score(report: &PageReport) -> u8 {
    let head = &report.head;
    let content = &report.content;
    let links = &report.links;
    let images = &report.images;
    let technical = &report.technical;
    let performance = &report.performance;

    let checks: [(bool, u32); 26] = [
        // Basic SEO
        (!head.title.is_empty(), 5),
        (!head.meta_description.is_empty(), 5),
        (!head.canonical_url.is_empty(), 3),
        (report.headings.h1_count == 1, 5),
        (images.images_with_alt > 0, 3),
        (performance.has_ssl, 4),
        // Content quality
        (content.total_words > 300, 5),
        (content.total_words > 1000, 5),
        (content.paragraph_count > 5, 3),
        (content.sentence_count > 10, 3),
        (content.flesch_reading_ease > 60.0, 4),
        (content.unique_words > 100, 5),
        // Technical SEO
        (performance.mobile_friendly, 5),
        (!head.og_title.is_empty(), 3),
        (!head.og_description.is_empty(), 3),
        (!head.twitter_card.is_empty(), 3),
        (technical.schema_scripts > 0, 5),
        (!technical.robots_directive.is_empty(), 3),
        (!technical.language.is_empty(), 3),
        // Link structure
        (links.internal_links > 5, 5),
        (links.external_links > 0, 3),
        (links.total_links > 10, 4),
        ((links.nofollow_links as f64) < links.total_links as f64 * 0.5, 3),
        // Media optimization
        (images.images_with_alt as f64 > images.total_images as f64 * 0.8, 5),
        (report.media.video_count > 0, 3),
        (!report.assets.css_files.is_empty(), 2),
    ];

    let total: u32 = checks
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, points)| points)
        .sum();

    u8::try_from(total.min(MAX_SCORE)).unwrap_or(u8::MAX)
}

/// Human-readable fixes, in a fixed order. Every trigger is evaluated independently.
pub fn recommendations(report: &PageReport) -> Vec<String> {
    let head = &report.head;
    let links = &report.links;
    let technical = &report.technical;
    let performance = &report.performance;
    let h1_count = report.headings.h1_count;
    let images_without_alt = report.images.images_without_alt;

    let triggers = [
        (head.title.is_empty(), "Missing page title".to_string()),
        (head.meta_description.is_empty(), "Missing meta description".to_string()),
        (h1_count == 0, "Missing H1 tag".to_string()),
        (h1_count > 1, "Multiple H1 tags found".to_string()),
        (
            images_without_alt > 0,
            format!("{images_without_alt} images missing alt text"),
        ),
        (!performance.has_ssl, "Website not using HTTPS".to_string()),
        (
            !performance.mobile_friendly,
            "No viewport meta tag for mobile".to_string(),
        ),
        (
            report.content.total_words < 300,
            "Content too short (less than 300 words)".to_string(),
        ),
        (
            report.content.flesch_reading_ease < 60.0,
            "Content may be too complex to read".to_string(),
        ),
        (
            links.nofollow_links as f64 > links.total_links as f64 * 0.5,
            "Too many nofollow links".to_string(),
        ),
        (head.og_title.is_empty(), "Missing Open Graph title".to_string()),
        (
            head.og_description.is_empty(),
            "Missing Open Graph description".to_string(),
        ),
        (head.twitter_card.is_empty(), "Missing Twitter Card".to_string()),
        (
            technical.schema_scripts == 0,
            "No structured data found".to_string(),
        ),
        (
            technical.robots_directive.is_empty(),
            "No robots meta tag".to_string(),
        ),
    ];

    triggers
        .into_iter()
        .filter_map(|(triggered, message)| triggered.then_some(message))
        .collect()
}
