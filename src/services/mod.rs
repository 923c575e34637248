// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod content;
pub mod extractor;
pub mod fetcher;
pub mod html;
pub mod links;
pub mod logging;
pub mod media;
pub mod scoring;
pub mod scrape;
pub mod tags;
pub mod user_agent;
