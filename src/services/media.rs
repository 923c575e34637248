// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Images, embedded video/audio, and stylesheet/script assets.

use crate::error::ScrapeError;
use crate::models::report::{AssetMetrics, ImageDetail, ImageMetrics, MediaMetrics};
use crate::services::html;
use scraper::Html;

const IMAGE_DETAIL_LIMIT: usize = 10;
const IMAGE_SOURCE_LIMIT: usize = 10;

pub fn extract_images(document: &Html) -> Result<ImageMetrics, ScrapeError> {
    let images = html::select_all(document, "img")?;

    let images_without_alt = images
        .iter()
        .filter(|img| img.value().attr("alt").unwrap_or_default().is_empty())
        .count();

    let image_details = images
        .iter()
        .take(IMAGE_DETAIL_LIMIT)
        .map(|img| ImageDetail {
            src: html::attr(img, "src"),
            alt: html::attr(img, "alt"),
            title: html::attr(img, "title"),
            width: html::attr(img, "width"),
            height: html::attr(img, "height"),
            loading: html::attr(img, "loading"),
            decoding: html::attr(img, "decoding"),
        })
        .collect();

    let image_sources = images
        .iter()
        .map(|img| html::attr(img, "src"))
        .filter(|src| !src.is_empty())
        .take(IMAGE_SOURCE_LIMIT)
        .collect();

    Ok(ImageMetrics {
        total_images: images.len(),
        images_without_alt,
        images_with_alt: images.len() - images_without_alt,
        image_details,
        image_sources,
    })
}

/// `<video>` and `<iframe>` embeds with their sources, plus the `<audio>` count.
pub fn extract_media(document: &Html) -> Result<MediaMetrics, ScrapeError> {
    let players = html::select_all(document, "video, iframe")?;
    let source = html::selector("source")?;

    let mut video_sources = Vec::new();
    for player in &players {
        if player.value().name() == "video" {
            video_sources.extend(player.select(&source).map(|s| html::attr(&s, "src")));
        } else {
            video_sources.push(html::attr(player, "src"));
        }
    }

    Ok(MediaMetrics {
        video_count: players.len(),
        video_sources,
        audio_count: html::count(document, "audio")?,
    })
}

pub fn extract_assets(document: &Html) -> Result<AssetMetrics, ScrapeError> {
    let css_files = html::select_all(document, r#"link[rel~="stylesheet"]"#)?
        .iter()
        .map(|link| html::attr(link, "href"))
        .collect();
    let js_files = html::select_all(document, "script[src]")?
        .iter()
        .map(|script| html::attr(script, "src"))
        .collect();

    Ok(AssetMetrics {
        css_files,
        js_files,
        inline_css_count: html::count(document, "style")?,
        inline_js_count: html::count(document, "script:not([src])")?,
    })
}
