//! Integration tests for inventory discovery
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! sitemap resolver, the crawler and the inventory builder end-to-end.

mod inventory_tests;
mod sitemap_tests;

use sitegap::config::Config;
use sitegap::crawler::Fetcher;
use wiremock::ResponseTemplate;

/// Configuration with short timeouts and no crawl pacing
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetch.timeout_secs = 5;
    config.inventory.crawl_delay_ms = 0;
    config
}

pub fn test_fetcher() -> Fetcher {
    let config = test_config();
    Fetcher::new(&config.fetch, &config.user_agent).expect("Failed to build fetcher")
}

/// 200 response with an HTML page linking to `links`
pub fn html_page(title: &str, links: &[&str]) -> ResponseTemplate {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    let body = format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    );
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

/// 200 response with a urlset listing `urls`
pub fn urlset(urls: &[String]) -> ResponseTemplate {
    let entries: String = urls
        .iter()
        .map(|u| format!("<url><loc>{}</loc></url>", u))
        .collect();
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    );
    ResponseTemplate::new(200).set_body_raw(body, "application/xml")
}

/// 200 response with a sitemap index listing `sitemaps`
pub fn sitemap_index(sitemaps: &[String]) -> ResponseTemplate {
    let entries: String = sitemaps
        .iter()
        .map(|u| format!("<sitemap><loc>{}</loc></sitemap>", u))
        .collect();
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</sitemapindex>"#,
        entries
    );
    ResponseTemplate::new(200).set_body_raw(body, "text/xml; charset=utf-8")
}
