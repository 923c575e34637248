// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Text statistics, readability, headings and block structure of a page.

use crate::error::ScrapeError;
use crate::models::report::{ContentMetrics, Headings, PageStructure};
use crate::services::html;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::collections::{HashMap, HashSet};

/// Subtrees whose text is not counted as page content.
const NON_CONTENT_ELEMENTS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

const TOP_KEYWORDS: usize = 20;
const DENSITY_KEYWORDS: usize = 10;
/// Words must be longer than this to count as keywords.
const MIN_KEYWORD_CHARS: usize = 2;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("invalid word regex"));
static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("invalid sentence regex"));
static VOWEL_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]+").expect("invalid syllable regex"));

/// Round to two decimals on the exact decimal value of `value`, ties to even.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// All text of the document outside script, style and page-chrome subtrees, concatenated
/// without separators.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.root_element().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| NON_CONTENT_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text
}

/// Lowercased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Frequency of every keyword-length word, most frequent first; ties keep first-seen order.
pub fn keyword_frequencies(words: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for word in words.iter().filter(|w| w.chars().count() > MIN_KEYWORD_CHARS) {
        match positions.get(word.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Non-empty, trimmed sentences split on runs of `.`, `!` and `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn syllable_count(word: &str) -> usize {
    VOWEL_GROUP_RE.find_iter(&word.to_lowercase()).count()
}

/// Simplified Flesch reading ease; 0 when either average is not positive.
pub fn flesch_reading_ease(avg_sentence_length: f64, avg_syllables_per_word: f64) -> f64 {
    if avg_sentence_length > 0.0 && avg_syllables_per_word > 0.0 {
        round2(206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word)
    } else {
        0.0
    }
}

pub fn extract_content(document: &Html) -> Result<ContentMetrics, ScrapeError> {
    let text = visible_text(document);
    let words = tokenize(&text);
    let total_words = words.len();
    let unique_words = words.iter().collect::<HashSet<_>>().len();

    let frequencies = keyword_frequencies(&words);
    let keyword_density: IndexMap<String, f64> = frequencies
        .iter()
        .take(DENSITY_KEYWORDS)
        .map(|(word, count)| {
            let density = round2(*count as f64 / total_words as f64 * 100.0);
            (word.clone(), density)
        })
        .collect();
    let top_keywords = frequencies.into_iter().take(TOP_KEYWORDS).collect();

    let sentence_list = sentences(&text);
    let avg_sentence_length = if sentence_list.is_empty() {
        0.0
    } else {
        let words_in_sentences: usize = sentence_list
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        round2(words_in_sentences as f64 / sentence_list.len() as f64)
    };

    let avg_syllables_per_word = if words.is_empty() {
        0.0
    } else {
        let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
        round2(syllables as f64 / total_words as f64)
    };

    let paragraphs = html::select_all(document, "p")?;
    let paragraphs_with_text = paragraphs.iter().filter(|p| !html::text(p).is_empty()).count();

    Ok(ContentMetrics {
        total_words,
        unique_words,
        top_keywords,
        keyword_density,
        sentence_count: sentence_list.len(),
        avg_sentence_length,
        avg_syllables_per_word,
        flesch_reading_ease: flesch_reading_ease(avg_sentence_length, avg_syllables_per_word),
        paragraph_count: paragraphs.len(),
        paragraphs_with_text,
    })
}

pub fn extract_headings(document: &Html) -> Result<Headings, ScrapeError> {
    let texts = |tag: &str| -> Result<Vec<String>, ScrapeError> {
        Ok(html::select_all(document, tag)?.iter().map(html::text).collect())
    };
    let h1_texts = texts("h1")?;
    let h2_texts = texts("h2")?;
    let h3_texts = texts("h3")?;
    let h4_texts = texts("h4")?;

    Ok(Headings {
        h1_count: h1_texts.len(),
        h1_texts,
        h2_count: h2_texts.len(),
        h2_texts,
        h3_count: h3_texts.len(),
        h3_texts,
        h4_count: h4_texts.len(),
        h4_texts,
        h5_count: html::count(document, "h5")?,
        h6_count: html::count(document, "h6")?,
    })
}

pub fn extract_structure(document: &Html) -> Result<PageStructure, ScrapeError> {
    Ok(PageStructure {
        form_count: html::count(document, "form")?,
        table_count: html::count(document, "table")?,
        unordered_lists: html::count(document, "ul")?,
        ordered_lists: html::count(document, "ol")?,
    })
}
