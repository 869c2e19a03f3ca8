//! Site inventory building
//!
//! The inventory of a site is taken from its sitemap when one exists; the
//! crawl is only a fallback. This is a strict either/or: any sitemap URL at
//! all short-circuits the crawl, even if the sitemap is only partially
//! usable.

mod diagnostics;

pub use diagnostics::RunDiagnostics;

use crate::config::{Config, InventoryConfig};
use crate::crawler::{extract_title, CrawlOptions, Crawler, FetchResult, Fetcher, PageRecord};
use crate::sitemap::SitemapResolver;
use crate::url::to_path;
use crate::SiteGapError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use url::Url;

/// Where the pages of an inventory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventorySource {
    Sitemap,
    Crawl,
}

impl std::fmt::Display for InventorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sitemap => write!(f, "sitemap"),
            Self::Crawl => write!(f, "crawl"),
        }
    }
}

/// The result of one inventory run
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Normalized base URL of the site
    pub base_url: Url,

    /// Sitemap or crawl
    pub source: InventorySource,

    /// Discovered pages
    pub pages: Vec<PageRecord>,

    /// Fetch counters for the run
    pub diagnostics: RunDiagnostics,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// How long the run took
    pub elapsed: Duration,
}

impl Inventory {
    /// Returns true if nothing could be discovered
    ///
    /// An empty inventory means "unknown", not "the site has no pages".
    pub fn is_unknown(&self) -> bool {
        self.pages.is_empty()
    }

    /// Why the inventory is unknown, or `None` if pages were found
    ///
    /// Separates "offline or blocking us" (no fetch got any response) from
    /// "responded, but nothing usable".
    pub fn unknown_reason(&self) -> Option<&'static str> {
        if !self.is_unknown() {
            return None;
        }
        if self.diagnostics.all_fetches_failed() {
            Some("every request failed; the site is offline or blocking requests")
        } else {
            Some("the site responded but no usable pages were found")
        }
    }

    /// Canonical paths of every discovered page
    pub fn paths(&self) -> HashSet<String> {
        self.pages.iter().map(|page| to_path(&page.url)).collect()
    }
}

/// Builds site inventories
///
/// The builder holds only configuration and a shareable HTTP client. Each
/// call to [`InventoryBuilder::build_inventory`] creates its own tried set,
/// frontier and counters, so independent runs (a site and a competitor) may
/// proceed concurrently.
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    fetcher: Fetcher,
    settings: InventoryConfig,
}

impl InventoryBuilder {
    /// Creates a builder from configuration
    pub fn new(config: &Config) -> Result<Self, SiteGapError> {
        Ok(Self {
            fetcher: Fetcher::new(&config.fetch, &config.user_agent)?,
            settings: config.inventory.clone(),
        })
    }

    /// Discovers the pages published by the site at `base_url`
    ///
    /// # Policy
    ///
    /// 1. Resolve the sitemap (following indexes)
    /// 2. If it lists any URL, fetch up to `max-sitemap-pages` of them for
    ///    titles and return those; the crawler is never invoked
    /// 3. Otherwise crawl, capped at `max-crawl-pages`
    ///
    /// Never fails: every network or content problem is a skip, counted in
    /// the returned diagnostics.
    pub async fn build_inventory(&self, base_url: &Url) -> Inventory {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut diagnostics = RunDiagnostics::default();

        tracing::info!("Building inventory for {}", base_url);

        let sitemap_urls =
            SitemapResolver::new(&self.fetcher, base_url, self.settings.max_sitemap_fetches)
                .run(&mut diagnostics)
                .await;

        let (source, pages) = if sitemap_urls.is_empty() {
            tracing::info!("No sitemap URLs for {}, falling back to crawl", base_url);
            let options = CrawlOptions {
                max_pages: self.settings.max_crawl_pages,
                scope: self.settings.scope,
                delay: Duration::from_millis(self.settings.crawl_delay_ms),
            };
            let pages = Crawler::new(&self.fetcher, base_url.clone(), options)
                .run(&mut diagnostics)
                .await;
            (InventorySource::Crawl, pages)
        } else {
            let pages = self.fetch_titles(&sitemap_urls, &mut diagnostics).await;
            (InventorySource::Sitemap, pages)
        };

        if pages.is_empty() {
            tracing::warn!(
                "Inventory unknown for {}: {} fetches attempted, {} failed",
                base_url,
                diagnostics.fetches_attempted,
                diagnostics.fetches_failed
            );
        } else {
            tracing::info!(
                "Discovered {} pages for {} via {}",
                pages.len(),
                base_url,
                source
            );
        }

        Inventory {
            base_url: base_url.clone(),
            source,
            pages,
            diagnostics,
            started_at,
            elapsed: start.elapsed(),
        }
    }

    /// Fetches sitemap-listed pages for their titles, up to the configured cap
    async fn fetch_titles(
        &self,
        urls: &[String],
        diagnostics: &mut RunDiagnostics,
    ) -> Vec<PageRecord> {
        if urls.len() > self.settings.max_sitemap_pages {
            tracing::info!(
                "Sitemap lists {} URLs, fetching the first {}",
                urls.len(),
                self.settings.max_sitemap_pages
            );
        }

        let mut pages = Vec::new();
        for url in urls.iter().take(self.settings.max_sitemap_pages) {
            let result = self.fetcher.fetch(url).await;
            diagnostics.record_fetch(&result);

            match result {
                FetchResult::Response {
                    status_code: 200,
                    body,
                    ..
                } => pages.push(PageRecord::new(url.as_str(), extract_title(&body))),
                FetchResult::Response { status_code, .. } => {
                    tracing::debug!("Skipping {}: HTTP {}", url, status_code);
                    diagnostics.record_skip();
                }
                FetchResult::NetworkError { error, .. } => {
                    tracing::warn!("Skipping {}: {}", url, error);
                }
            }
        }
        pages
    }
}
