//! Breadth-first same-site crawl
//!
//! This is the inventory fallback for sites without a usable sitemap. One
//! [`Crawler`] value is one run: it owns its frontier and visited set and is
//! consumed by [`Crawler::run`].

use crate::crawler::fetcher::{FetchResult, Fetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::crawler::PageRecord;
use crate::inventory::RunDiagnostics;
use crate::url::ScopeMode;
use std::time::Duration;
use url::Url;

/// Settings for one crawl run
#[derive(Debug, Clone, Copy)]
pub struct CrawlOptions {
    /// Maximum number of pages fetched (and admitted to the frontier)
    pub max_pages: usize,

    /// Which links count as the same site
    pub scope: ScopeMode,

    /// Pause between consecutive fetches
    pub delay: Duration,
}

/// State of a single breadth-first crawl
pub struct Crawler<'a> {
    fetcher: &'a Fetcher,
    base_url: Url,
    options: CrawlOptions,
    frontier: Frontier,
    found: Vec<PageRecord>,
}

impl<'a> Crawler<'a> {
    /// Creates a crawl rooted at `base_url`
    pub fn new(fetcher: &'a Fetcher, base_url: Url, options: CrawlOptions) -> Self {
        let frontier = Frontier::new(base_url.clone(), options.max_pages);
        Self {
            fetcher,
            base_url,
            options,
            frontier,
            found: Vec::new(),
        }
    }

    /// Runs the crawl to completion
    ///
    /// Stops when the frontier is empty or the page cap is reached. Returns
    /// the records in discovery order. An empty result means the base URL
    /// itself could not be fetched.
    pub async fn run(mut self, diagnostics: &mut RunDiagnostics) -> Vec<PageRecord> {
        tracing::info!(
            "Crawling {} (max {} pages, scope {})",
            self.base_url,
            self.options.max_pages,
            self.options.scope
        );

        let mut first = true;
        while let Some(url) = self.frontier.next_url() {
            if !first && !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }
            first = false;

            self.process_url(&url, diagnostics).await;
        }

        tracing::info!(
            "Crawl finished: {} pages recorded, {} visited",
            self.found.len(),
            self.frontier.visited_count()
        );

        self.found
    }

    /// Fetches one page, records it, and enqueues its in-scope links
    async fn process_url(&mut self, url: &Url, diagnostics: &mut RunDiagnostics) {
        tracing::debug!("Fetching {}", url);

        let result = self.fetcher.fetch(url.as_str()).await;
        diagnostics.record_fetch(&result);

        let body = match result {
            FetchResult::Response {
                status_code: 200,
                body,
                ..
            } => body,
            FetchResult::Response { status_code, .. } => {
                tracing::debug!("Skipping {}: HTTP {}", url, status_code);
                diagnostics.record_skip();
                return;
            }
            FetchResult::NetworkError { error, .. } => {
                tracing::warn!("Skipping {}: {}", url, error);
                return;
            }
        };

        let parsed = parse_html(&body, url);
        self.found.push(PageRecord::new(url.as_str(), parsed.title));

        for link in parsed.links {
            if !self.options.scope.contains(&self.base_url, &link) {
                tracing::trace!("Out of scope: {}", link);
                continue;
            }
            self.frontier.admit(link);
        }
    }
}

/// Crawls `base_url` breadth-first with the given options
///
/// Convenience wrapper around [`Crawler`].
pub async fn crawl(
    fetcher: &Fetcher,
    base_url: Url,
    options: CrawlOptions,
    diagnostics: &mut RunDiagnostics,
) -> Vec<PageRecord> {
    Crawler::new(fetcher, base_url, options)
        .run(diagnostics)
        .await
}
