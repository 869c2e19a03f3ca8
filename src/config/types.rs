use crate::url::ScopeMode;
use serde::Deserialize;

/// Main configuration structure for sitegap
///
/// Every section and field is optional in the TOML file; missing values fall
/// back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub inventory: InventoryConfig,
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum redirect hops followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    pub name: String,

    /// Version of the client
    pub version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact_url)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "LocalSEO-Gap-Analyzer".to_string(),
            version: "0.1".to_string(),
            contact_url: "https://example.com".to_string(),
        }
    }
}

/// Inventory discovery limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Maximum sitemap-listed URLs fetched for titles
    #[serde(rename = "max-sitemap-pages")]
    pub max_sitemap_pages: usize,

    /// Maximum sitemap documents fetched while resolving indexes
    #[serde(rename = "max-sitemap-fetches")]
    pub max_sitemap_fetches: usize,

    /// Page cap for the fallback crawl
    #[serde(rename = "max-crawl-pages")]
    pub max_crawl_pages: usize,

    /// Pause between crawl fetches (milliseconds)
    #[serde(rename = "crawl-delay-ms")]
    pub crawl_delay_ms: u64,

    /// Which links count as the same site during the crawl
    pub scope: ScopeMode,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_sitemap_pages: 500,
            max_sitemap_fetches: 100,
            max_crawl_pages: 150,
            crawl_delay_ms: 50,
            scope: ScopeMode::RegistrableDomain,
        }
    }
}
