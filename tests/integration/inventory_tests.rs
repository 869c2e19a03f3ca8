//! End-to-end inventory runs: sitemap first, crawl as the fallback

use crate::{html_page, test_config, urlset};
use sitegap::ideal::{build_ideal_sitemap, UrlPattern};
use sitegap::output::GapReport;
use sitegap::url::normalize_base_url;
use sitegap::{InventoryBuilder, InventorySource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_sitemap_inventory_skips_crawl() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(urlset(&[format!("{}/a/", base), format!("{}/b", base)]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/"))
        .respond_with(html_page("Page A", &[]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page("Page B", &[]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Home", &["/c/"]))
        .expect(0)
        .mount(&server)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let base_url = normalize_base_url(&base).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.source, InventorySource::Sitemap);
    assert_eq!(inventory.pages.len(), 2);
    assert_eq!(inventory.pages[0].url, format!("{}/a/", base));
    assert_eq!(inventory.pages[0].title, "Page A");
    assert_eq!(inventory.pages[1].url, format!("{}/b", base));
    assert_eq!(inventory.pages[1].title, "Page B");
    assert!(inventory.paths().contains("/b/"));
}

#[tokio::test]
async fn test_crawl_fallback_without_sitemap() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            "Home",
            &["/services/", "/contact/", "https://external.example/partners/"],
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/"))
        .respond_with(html_page("Services", &[]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact/"))
        .respond_with(html_page("Contact", &[]))
        .mount(&server)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let base_url = normalize_base_url(&base).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.source, InventorySource::Crawl);
    assert_eq!(inventory.pages.len(), 3);
    assert!(inventory.pages.iter().all(|p| p.url.starts_with(&base)));
    // sitemap.xml plus three pages
    assert_eq!(inventory.diagnostics.fetches_attempted, 4);
}

#[tokio::test]
async fn test_crawl_fallback_honors_max_pages() {
    let server = MockServer::start().await;

    let links: Vec<String> = (1..=10).map(|i| format!("/page-{}/", i)).collect();
    let link_refs: Vec<&str> = links.iter().map(String::as_str).collect();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Home", &link_refs))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config();
    config.inventory.max_crawl_pages = 1;
    let builder = InventoryBuilder::new(&config).unwrap();
    let base_url = normalize_base_url(&server.uri()).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.source, InventorySource::Crawl);
    assert_eq!(inventory.pages.len(), 1);
    assert_eq!(inventory.pages[0].title, "Home");
}

#[tokio::test]
async fn test_unusable_sitemap_urls_do_not_trigger_crawl() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(urlset(&[format!("{}/gone/", base)]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Home", &[]))
        .expect(0)
        .mount(&server)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let base_url = normalize_base_url(&base).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.source, InventorySource::Sitemap);
    assert!(inventory.is_unknown());
    assert_eq!(inventory.diagnostics.pages_skipped, 1);
}

#[tokio::test]
async fn test_sitemap_pages_capped() {
    let server = MockServer::start().await;
    let base = server.uri();

    let urls: Vec<String> = (1..=4).map(|i| format!("{}/p{}/", base, i)).collect();
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(urlset(&urls))
        .mount(&server)
        .await;

    for i in 1..=4u64 {
        Mock::given(method("GET"))
            .and(path(format!("/p{}/", i)))
            .respond_with(html_page("Page", &[]))
            .expect(if i <= 2 { 1 } else { 0 })
            .mount(&server)
            .await;
    }

    let mut config = test_config();
    config.inventory.max_sitemap_pages = 2;
    let builder = InventoryBuilder::new(&config).unwrap();
    let base_url = normalize_base_url(&base).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.pages.len(), 2);
}

#[tokio::test]
async fn test_erroring_site_is_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let base_url = normalize_base_url(&server.uri()).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert!(inventory.is_unknown());
    assert_eq!(inventory.source, InventorySource::Crawl);
    assert_eq!(inventory.diagnostics.fetches_attempted, 2);
    assert_eq!(inventory.diagnostics.pages_skipped, 2);
    assert!(inventory
        .unknown_reason()
        .unwrap()
        .contains("no usable pages"));
}

#[tokio::test]
async fn test_offline_site_counts_connect_failures() {
    let builder = InventoryBuilder::new(&test_config()).unwrap();
    // Nothing listens on the discard port
    let base_url = normalize_base_url("http://127.0.0.1:9").unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert!(inventory.is_unknown());
    assert_eq!(inventory.diagnostics.fetches_attempted, 2);
    assert_eq!(inventory.diagnostics.connect_failures, 2);
    assert_eq!(inventory.diagnostics.timeouts, 0);
    assert!(inventory.diagnostics.all_fetches_failed());
    assert!(inventory.unknown_reason().unwrap().contains("offline"));
}

#[tokio::test]
async fn test_requests_carry_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "LocalSEO-Gap-Analyzer/0.1 (+https://example.com)",
        ))
        .respond_with(html_page("Home", &[]))
        .expect(1)
        .mount(&server)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let base_url = normalize_base_url(&server.uri()).unwrap();
    let inventory = builder.build_inventory(&base_url).await;

    assert_eq!(inventory.pages.len(), 1);
}

#[tokio::test]
async fn test_concurrent_runs_are_independent() {
    let site = MockServer::start().await;
    let rival = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Site", &["/about/"]))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/about/"))
        .respond_with(html_page("About", &[]))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(urlset(&[format!("{}/carmel/hvac/", rival.uri())]))
        .mount(&rival)
        .await;
    Mock::given(method("GET"))
        .and(path("/carmel/hvac/"))
        .respond_with(html_page("HVAC in Carmel", &[]))
        .mount(&rival)
        .await;

    let builder = InventoryBuilder::new(&test_config()).unwrap();
    let site_url = normalize_base_url(&site.uri()).unwrap();
    let rival_url = normalize_base_url(&rival.uri()).unwrap();

    let (site_inventory, rival_inventory) = tokio::join!(
        builder.build_inventory(&site_url),
        builder.build_inventory(&rival_url)
    );

    assert_eq!(site_inventory.source, InventorySource::Crawl);
    assert_eq!(site_inventory.pages.len(), 2);
    assert_eq!(rival_inventory.source, InventorySource::Sitemap);
    assert_eq!(rival_inventory.pages.len(), 1);

    let ideal = build_ideal_sitemap(
        &["HVAC".to_string()],
        &["Carmel".to_string()],
        UrlPattern::CityService,
    );
    let site_gap = GapReport::for_inventory(&ideal, &site_inventory);
    let rival_gap = GapReport::for_inventory(&ideal, &rival_inventory);

    assert_eq!(site_gap.service_city_counts(), (1, 1));
    assert_eq!(rival_gap.service_city_counts(), (0, 1));
    assert!(site_gap.present().iter().any(|p| p.path == "/about/"));
}
