//! Output module for gap analysis and reports
//!
//! This module handles:
//! - Matching the ideal sitemap against a site inventory
//! - Exporting ideal, discovered and missing pages as CSV
//! - Rendering the markdown report
//! - Printing run statistics to the console

mod csv_export;
mod gap;
mod markdown;
pub mod stats;

pub use csv_export::{
    write_csv, write_ideal_csv, write_pages_csv, DISCOVERED_PAGES_CSV, IDEAL_SITEMAP_CSV,
    MISSING_PAGES_CSV,
};
pub use gap::{match_existing, match_paths, GapReport, GapRow};
pub use markdown::{
    format_markdown_report, write_markdown_report, CompetitorSection, ReportContext,
    REPORT_MARKDOWN,
};
pub use stats::{print_gap_summary, print_statistics};
