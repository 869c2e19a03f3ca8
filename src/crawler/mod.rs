//! Crawler module for page fetching and same-site traversal
//!
//! This module contains:
//! - The fetcher that isolates all network fault handling
//! - HTML parsing for titles and links
//! - The bounded breadth-first frontier
//! - The crawl loop used when a site has no sitemap

mod crawl;
mod fetcher;
mod frontier;
mod parser;

pub use crawl::{crawl, CrawlOptions, Crawler};
pub use fetcher::{build_http_client, FetchResult, Fetcher, NetworkErrorKind};
pub use frontier::Frontier;
pub use parser::{extract_title, parse_html, ParsedPage};

use serde::Serialize;

/// A discovered page: its URL and title
///
/// The title is an empty string when the page has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
}

impl PageRecord {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}
