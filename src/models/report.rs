// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The page report and the field groups it is assembled from.
//!
//! Every group is flattened into the report, so the wire format is one flat JSON object
//! whose field names are a public contract.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

/// Title, meta description, social cards and canonical links from `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct HeadTags {
    pub title: String,
    pub title_length: usize,
    /// Title length is within 50..=60 characters
    pub title_optimal: bool,
    pub meta_description: String,
    pub meta_description_length: usize,
    /// Description length is within 150..=160 characters
    pub meta_description_optimal: bool,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub canonical_url: String,
    pub alternate_links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Headings {
    pub h1_count: usize,
    pub h1_texts: Vec<String>,
    pub h2_count: usize,
    pub h2_texts: Vec<String>,
    pub h3_count: usize,
    pub h3_texts: Vec<String>,
    pub h4_count: usize,
    pub h4_texts: Vec<String>,
    pub h5_count: usize,
    pub h6_count: usize,
}

/// Word statistics and readability of the visible body text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ContentMetrics {
    pub total_words: usize,
    pub unique_words: usize,
    /// Up to 20 `[word, count]` pairs, most frequent first
    #[schema(value_type = Vec<Object>)]
    pub top_keywords: Vec<(String, usize)>,
    /// Percentage of total words for each of the top 10 keywords
    #[schema(value_type = Object)]
    pub keyword_density: IndexMap<String, f64>,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
    pub flesch_reading_ease: f64,
    pub paragraph_count: usize,
    pub paragraphs_with_text: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct LinkMetrics {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    /// First 20 non-empty anchor texts
    pub link_texts: Vec<String>,
    pub nofollow_links: usize,
    pub external_domains: Vec<String>,
    /// First 20 internal hrefs, excluding fragments and `mailto:`
    pub internal_pages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ImageDetail {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub width: String,
    pub height: String,
    pub loading: String,
    pub decoding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ImageMetrics {
    pub total_images: usize,
    pub images_without_alt: usize,
    pub images_with_alt: usize,
    /// First 10 images
    pub image_details: Vec<ImageDetail>,
    /// First 10 non-empty `src` values
    pub image_sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct MediaMetrics {
    /// `<video>` plus `<iframe>` elements
    pub video_count: usize,
    pub video_sources: Vec<String>,
    pub audio_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PageStructure {
    pub form_count: usize,
    pub table_count: usize,
    pub unordered_lists: usize,
    pub ordered_lists: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AssetMetrics {
    pub css_files: Vec<String>,
    pub js_files: Vec<String>,
    pub inline_css_count: usize,
    pub inline_js_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct TechnicalTags {
    pub robots_directive: String,
    pub viewport: String,
    pub language: String,
    pub charset: String,
    /// `name` (or `property`) to `content` for every meta tag having both
    #[schema(value_type = Object)]
    pub all_meta_tags: IndexMap<String, String>,
    pub schema_scripts: usize,
    /// JSON-LD blocks that parsed successfully
    #[schema(value_type = Vec<Object>)]
    pub structured_data_content: Vec<serde_json::Value>,
    pub google_analytics: bool,
    pub facebook_pixel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct OutreachLinks {
    pub social_media_links: Vec<String>,
    pub contact_links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SecurityHeaders {
    #[serde(rename = "x-frame-options")]
    pub x_frame_options: String,
    #[serde(rename = "x-content-type-options")]
    pub x_content_type_options: String,
    #[serde(rename = "x-xss-protection")]
    pub x_xss_protection: String,
    #[serde(rename = "strict-transport-security")]
    pub strict_transport_security: String,
    #[serde(rename = "content-security-policy")]
    pub content_security_policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ServerInfo {
    pub server: String,
    #[serde(rename = "x-powered-by")]
    pub x_powered_by: String,
    #[serde(rename = "cache-control")]
    pub cache_control: String,
    pub expires: String,
    #[serde(rename = "last-modified")]
    pub last_modified: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PerformanceSignals {
    pub has_ssl: bool,
    pub mobile_friendly: bool,
    pub has_minified_css: bool,
    pub has_minified_js: bool,
    pub has_compressed_resources: bool,
    pub security_headers: SecurityHeaders,
    pub server_info: ServerInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_density_serializes_in_rank_order() {
        let content = ContentMetrics {
            keyword_density: [("zebra".to_string(), 50.0), ("apple".to_string(), 25.0)]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains(r#""keyword_density":{"zebra":50.0,"apple":25.0}"#));
    }

    #[test]
    fn test_security_headers_use_header_names_as_keys() {
        let headers = SecurityHeaders {
            x_frame_options: "DENY".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&headers).unwrap();
        assert_eq!(json["x-frame-options"], "DENY");
        assert_eq!(json["content-security-policy"], "");
    }

    #[test]
    fn test_top_keywords_serialize_as_pairs() {
        let content = ContentMetrics {
            top_keywords: vec![("rust".to_string(), 4)],
            ..Default::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["top_keywords"], serde_json::json!([["rust", 4]]));
    }
}
