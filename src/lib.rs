// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Single-page SEO scraper: fetch one URL, parse it, and report on-page SEO metrics.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
