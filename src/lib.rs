//! sitegap: local-SEO site inventory and gap analysis
//!
//! This crate discovers the pages a website publishes (sitemap first, bounded
//! same-domain crawl as fallback), generates the ideal set of local-SEO
//! landing pages for a business, and reports which of those pages are missing.

pub mod config;
pub mod crawler;
pub mod ideal;
pub mod inventory;
pub mod output;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for sitegap operations
#[derive(Debug, Error)]
pub enum SiteGapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Sitemap parse error: {0}")]
    SitemapParse(String),

    #[error("Inventory unknown for {url}: no pages could be discovered")]
    InventoryUnknown { url: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for sitegap operations
pub type Result<T> = std::result::Result<T, SiteGapError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::PageRecord;
pub use inventory::{Inventory, InventoryBuilder, InventorySource, RunDiagnostics};
pub use url::{normalize_base_url, to_path, ScopeMode};
