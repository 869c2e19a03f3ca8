//! URL handling module for sitegap
//!
//! This module provides base-URL normalization for user input, domain and
//! registrable-domain extraction, crawl scope checks, and the path
//! canonicalization used to compare discovered pages with the ideal sitemap.

mod domain;
mod normalize;
mod path;

use serde::Deserialize;
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, registrable_domain};
pub use normalize::normalize_base_url;
pub use path::to_path;

/// Which discovered links count as part of the site being inventoried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeMode {
    /// Same registrable domain (eTLD+1); subdomains are in scope
    #[default]
    RegistrableDomain,
    /// Exactly the same host name
    ExactHost,
}

impl ScopeMode {
    /// Returns true if `candidate` belongs to the same site as `base`
    ///
    /// Ports are ignored in both modes. URLs without a host are never in scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitegap::url::ScopeMode;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://example.com/").unwrap();
    /// let blog = Url::parse("https://blog.example.com/post").unwrap();
    ///
    /// assert!(ScopeMode::RegistrableDomain.contains(&base, &blog));
    /// assert!(!ScopeMode::ExactHost.contains(&base, &blog));
    /// ```
    pub fn contains(&self, base: &Url, candidate: &Url) -> bool {
        let (left, right) = match self {
            Self::RegistrableDomain => (registrable_domain(base), registrable_domain(candidate)),
            Self::ExactHost => (extract_domain(base), extract_domain(candidate)),
        };

        match (left, right) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl std::fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegistrableDomain => write!(f, "registrable-domain"),
            Self::ExactHost => write!(f, "exact-host"),
        }
    }
}
