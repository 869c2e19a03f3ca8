//! Sitemap resolution against mock servers

use crate::{sitemap_index, test_fetcher, urlset};
use sitegap::inventory::RunDiagnostics;
use sitegap::sitemap::resolve_sitemap;
use sitegap::url::normalize_base_url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_urlset_is_sorted_and_deduplicated() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(urlset(&[
            format!("{}/services/", base),
            format!("{}/about/", base),
            format!("{}/services/", base),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&base).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 100, &mut diagnostics).await;

    assert_eq!(
        urls,
        vec![format!("{}/about/", base), format!("{}/services/", base)]
    );
    assert_eq!(diagnostics.fetches_attempted, 1);
    assert_eq!(diagnostics.sitemaps_parsed, 1);
    assert!(!diagnostics.sitemap_limit_reached);
}

#[tokio::test]
async fn test_cyclic_sitemap_index_terminates() {
    let server = MockServer::start().await;
    let base = server.uri();

    // sitemap.xml -> a.xml -> (sitemap.xml, b.xml)
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(sitemap_index(&[
            format!("{}/a.xml", base),
            format!("{}/sitemap.xml", base),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a.xml"))
        .respond_with(sitemap_index(&[
            format!("{}/sitemap.xml", base),
            format!("{}/b.xml", base),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b.xml"))
        .respond_with(urlset(&[format!("{}/contact/", base)]))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&base).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 100, &mut diagnostics).await;

    assert_eq!(urls, vec![format!("{}/contact/", base)]);
    assert_eq!(diagnostics.fetches_attempted, 3);
    assert_eq!(diagnostics.sitemaps_parsed, 3);
}

#[tokio::test]
async fn test_fetch_limit_caps_nested_sitemaps() {
    let server = MockServer::start().await;
    let base = server.uri();

    let children: Vec<String> = (1..=5).map(|i| format!("{}/s{}.xml", base, i)).collect();
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(sitemap_index(&children))
        .expect(1)
        .mount(&server)
        .await;

    for i in 1..=5u64 {
        let expected = if i <= 2 { 1 } else { 0 };
        Mock::given(method("GET"))
            .and(path(format!("/s{}.xml", i)))
            .respond_with(urlset(&[format!("{}/page-{}/", base, i)]))
            .expect(expected)
            .mount(&server)
            .await;
    }

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&base).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 3, &mut diagnostics).await;

    assert_eq!(
        urls,
        vec![format!("{}/page-1/", base), format!("{}/page-2/", base)]
    );
    assert_eq!(diagnostics.fetches_attempted, 3);
    assert!(diagnostics.sitemap_limit_reached);
}

#[tokio::test]
async fn test_non_xml_content_type_is_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    let body = format!(
        "<urlset><url><loc>{}/hidden/</loc></url></urlset>",
        base
    );
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&base).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 100, &mut diagnostics).await;

    assert!(urls.is_empty());
    assert_eq!(diagnostics.sitemaps_parsed, 0);
    assert_eq!(diagnostics.pages_skipped, 1);
}

#[tokio::test]
async fn test_missing_sitemap_yields_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&server.uri()).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 100, &mut diagnostics).await;

    assert!(urls.is_empty());
    assert_eq!(diagnostics.fetches_attempted, 1);
    assert_eq!(diagnostics.fetches_failed, 0);
    assert_eq!(diagnostics.pages_skipped, 1);
}

#[tokio::test]
async fn test_malformed_nested_sitemap_keeps_other_urls() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(sitemap_index(&[
            format!("{}/broken.xml", base),
            format!("{}/pages.xml", base),
        ]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken.xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "<urlset><url><loc>https://example.com/</url></urlset>",
                "application/xml",
            ),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages.xml"))
        .respond_with(urlset(&[format!("{}/faq/", base)]))
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let base_url = normalize_base_url(&base).unwrap();
    let mut diagnostics = RunDiagnostics::default();

    let urls = resolve_sitemap(&fetcher, &base_url, 100, &mut diagnostics).await;

    assert_eq!(urls, vec![format!("{}/faq/", base)]);
    assert_eq!(diagnostics.sitemaps_parsed, 2);
}
