//! Sitemap XML parsing
//!
//! Handles both document kinds of the sitemap protocol:
//! `urlset/url/loc` (content pages) and `sitemapindex/sitemap/loc` (nested
//! sitemaps). Only the direct `<loc>` child of an entry is read, so extension
//! elements such as `<image:image><image:loc>` do not leak into the result.

use crate::SiteGapError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// The locations listed by one sitemap document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    /// `<sitemap><loc>` entries (sitemap index)
    pub sitemaps: Vec<String>,

    /// `<url><loc>` entries (urlset)
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Url,
    Sitemap,
}

#[derive(Debug)]
struct OpenEntry {
    kind: EntryKind,
    depth: usize,
    loc: Option<String>,
}

/// Parses a sitemap or sitemap index document
///
/// # Example
///
/// ```
/// use sitegap::sitemap::parse_sitemap;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/about/</loc></url>
/// </urlset>"#;
///
/// let doc = parse_sitemap(xml).unwrap();
/// assert_eq!(doc.urls, vec!["https://example.com/about/".to_string()]);
/// assert!(doc.sitemaps.is_empty());
/// ```
pub fn parse_sitemap(xml: &str) -> Result<SitemapDocument, SiteGapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = SitemapDocument::default();
    let mut depth = 0usize;
    let mut entry: Option<OpenEntry> = None;
    let mut loc_text: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let name = e.local_name();
                match (name.as_ref(), entry.as_ref()) {
                    (b"url", None) => {
                        entry = Some(OpenEntry {
                            kind: EntryKind::Url,
                            depth,
                            loc: None,
                        })
                    }
                    (b"sitemap", None) => {
                        entry = Some(OpenEntry {
                            kind: EntryKind::Sitemap,
                            depth,
                            loc: None,
                        })
                    }
                    (b"loc", Some(open)) if depth == open.depth + 1 && open.loc.is_none() => {
                        loc_text = Some(String::new());
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"loc" {
                    if let (Some(text), Some(open)) = (loc_text.take(), entry.as_mut()) {
                        open.loc = Some(text.trim().to_string());
                    }
                }

                if entry.as_ref().is_some_and(|open| open.depth == depth) {
                    if let Some(open) = entry.take() {
                        finish_entry(open, &mut document);
                    }
                }

                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(e)) => {
                if let Some(text) = loc_text.as_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| SiteGapError::SitemapParse(err.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(text) = loc_text.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SiteGapError::SitemapParse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(document)
}

fn finish_entry(open: OpenEntry, document: &mut SitemapDocument) {
    let Some(loc) = open.loc.filter(|loc| !loc.is_empty()) else {
        return;
    };

    match open.kind {
        EntryKind::Url => document.urls.push(loc),
        EntryKind::Sitemap => document.sitemaps.push(loc),
    }
}
