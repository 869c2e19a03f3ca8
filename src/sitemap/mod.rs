//! Sitemap discovery
//!
//! This module handles:
//! - Parsing `urlset` and `sitemapindex` documents
//! - Following nested sitemap indexes with cycle protection and a fetch cap

mod parser;
mod resolver;

pub use parser::{parse_sitemap, SitemapDocument};
pub use resolver::{resolve_sitemap, SitemapResolver};
