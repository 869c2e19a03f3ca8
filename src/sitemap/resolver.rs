//! Sitemap index resolution
//!
//! Starting from `/sitemap.xml`, nested sitemap indexes are followed through
//! an explicit FIFO queue. Every sitemap URL is marked tried before it is
//! fetched, so self-referential or cyclic indexes terminate, and the total
//! number of sitemap fetches is capped.

use crate::crawler::{FetchResult, Fetcher};
use crate::inventory::RunDiagnostics;
use crate::sitemap::parser::parse_sitemap;
use std::collections::{BTreeSet, HashSet, VecDeque};
use url::Url;

/// State of a single sitemap resolution
pub struct SitemapResolver<'a> {
    fetcher: &'a Fetcher,

    /// Maximum number of sitemap documents fetched
    max_fetches: usize,

    /// Sitemap URLs waiting to be fetched
    pending: VecDeque<String>,

    /// Sitemap URLs already fetched (or attempted)
    tried: HashSet<String>,

    /// Page URLs collected so far; sorted and deduplicated by construction
    urls: BTreeSet<String>,
}

impl<'a> SitemapResolver<'a> {
    /// Creates a resolver rooted at `<base_url>/sitemap.xml`
    pub fn new(fetcher: &'a Fetcher, base_url: &Url, max_fetches: usize) -> Self {
        let mut pending = VecDeque::new();
        match base_url.join("/sitemap.xml") {
            Ok(root) => pending.push_back(root.to_string()),
            Err(e) => tracing::warn!("Cannot build sitemap URL for {}: {}", base_url, e),
        }

        Self {
            fetcher,
            max_fetches,
            pending,
            tried: HashSet::new(),
            urls: BTreeSet::new(),
        }
    }

    /// Resolves all reachable sitemaps and returns the listed page URLs
    ///
    /// The result is sorted and deduplicated. An empty result means no usable
    /// sitemap was found at any level.
    pub async fn run(mut self, diagnostics: &mut RunDiagnostics) -> Vec<String> {
        while let Some(sitemap_url) = self.pending.pop_front() {
            if self.tried.contains(&sitemap_url) {
                continue;
            }

            if self.tried.len() >= self.max_fetches {
                tracing::warn!(
                    "Sitemap fetch limit of {} reached, {} sitemaps left unread",
                    self.max_fetches,
                    self.pending.len() + 1
                );
                diagnostics.sitemap_limit_reached = true;
                break;
            }

            self.tried.insert(sitemap_url.clone());
            self.resolve_one(&sitemap_url, diagnostics).await;
        }

        tracing::info!(
            "Sitemap resolution finished: {} URLs from {} sitemaps",
            self.urls.len(),
            self.tried.len()
        );

        self.urls.into_iter().collect()
    }

    /// Fetches and parses one sitemap document
    async fn resolve_one(&mut self, sitemap_url: &str, diagnostics: &mut RunDiagnostics) {
        tracing::debug!("Fetching sitemap {}", sitemap_url);

        let result = self.fetcher.fetch(sitemap_url).await;
        diagnostics.record_fetch(&result);

        let body = match result {
            FetchResult::Response {
                status_code: 200,
                content_type,
                body,
                ..
            } if content_type.to_ascii_lowercase().contains("xml") => body,
            FetchResult::Response {
                status_code,
                content_type,
                ..
            } => {
                tracing::debug!(
                    "Ignoring sitemap {}: HTTP {} ({})",
                    sitemap_url,
                    status_code,
                    content_type
                );
                diagnostics.record_skip();
                return;
            }
            FetchResult::NetworkError { error, .. } => {
                tracing::warn!("Failed to fetch sitemap {}: {}", sitemap_url, error);
                return;
            }
        };

        let document = match parse_sitemap(&body) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Ignoring unparseable sitemap {}: {}", sitemap_url, e);
                diagnostics.record_skip();
                return;
            }
        };

        diagnostics.sitemaps_parsed += 1;
        tracing::debug!(
            "Sitemap {}: {} nested sitemaps, {} URLs",
            sitemap_url,
            document.sitemaps.len(),
            document.urls.len()
        );

        for nested in document.sitemaps {
            if !self.tried.contains(&nested) {
                self.pending.push_back(nested);
            }
        }
        self.urls.extend(document.urls);
    }
}

/// Resolves the sitemap of `base_url`
///
/// Convenience wrapper around [`SitemapResolver`].
pub async fn resolve_sitemap(
    fetcher: &Fetcher,
    base_url: &Url,
    max_fetches: usize,
    diagnostics: &mut RunDiagnostics,
) -> Vec<String> {
    SitemapResolver::new(fetcher, base_url, max_fetches)
        .run(diagnostics)
        .await
}
