use crate::crawler::{FetchResult, NetworkErrorKind};

/// Per-run counters that make best-effort failures observable
///
/// Distinguishes "few pages because the site is small" from "few pages
/// because fetches failed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunDiagnostics {
    /// Every HTTP request issued during the run
    pub fetches_attempted: usize,

    /// Requests that produced no response (timeout, connection, body read)
    pub fetches_failed: usize,

    /// Failed requests that hit the configured timeout
    pub timeouts: usize,

    /// Failed requests that never connected (refused, DNS, TLS)
    pub connect_failures: usize,

    /// Responses that were received but unusable: non-200 status, a sitemap
    /// that is not XML or does not parse
    pub pages_skipped: usize,

    /// Sitemap documents successfully parsed
    pub sitemaps_parsed: usize,

    /// True when sitemap resolution stopped at the fetch cap
    pub sitemap_limit_reached: bool,
}

impl RunDiagnostics {
    /// Counts a fetch and, if it failed at the network level, the failure
    pub fn record_fetch(&mut self, result: &FetchResult) {
        self.fetches_attempted += 1;
        if let FetchResult::NetworkError { kind, .. } = result {
            self.fetches_failed += 1;
            match kind {
                NetworkErrorKind::Timeout => self.timeouts += 1,
                NetworkErrorKind::Connect => self.connect_failures += 1,
                NetworkErrorKind::Body | NetworkErrorKind::Other => {}
            }
        }
    }

    /// Counts a received but unusable response
    pub fn record_skip(&mut self) {
        self.pages_skipped += 1;
    }

    /// Returns true if at least one fetch was made and none got a response
    ///
    /// An empty inventory with this set means the site is offline or
    /// blocking us, not that it publishes nothing.
    pub fn all_fetches_failed(&self) -> bool {
        self.fetches_attempted > 0 && self.fetches_failed == self.fetches_attempted
    }
}
