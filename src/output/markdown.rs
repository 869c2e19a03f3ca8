//! Markdown report generation
//!
//! This module renders the human-readable gap report: run information,
//! inventory diagnostics, the prioritized list of missing pages, and an
//! optional competitor snapshot.

use crate::ideal::IdealPage;
use crate::inventory::Inventory;
use crate::output::gap::GapReport;
use crate::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

/// File name of the markdown report
pub const REPORT_MARKDOWN: &str = "report.md";

/// A competitor's inventory and its gap analysis
#[derive(Debug, Clone, Copy)]
pub struct CompetitorSection<'a> {
    pub inventory: &'a Inventory,
    pub gap: &'a GapReport,
}

/// Everything the report shows
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub business_name: &'a str,
    pub site: &'a Inventory,
    pub gap: &'a GapReport,
    pub competitor: Option<CompetitorSection<'a>>,
    pub config_hash: Option<&'a str>,
    pub generated_at: DateTime<Utc>,
}

/// Writes the markdown report to `output_path`
pub fn write_markdown_report(report: &ReportContext<'_>, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, format_markdown_report(report))?;
    Ok(())
}

/// Formats the gap report as markdown
pub fn format_markdown_report(report: &ReportContext<'_>) -> String {
    let mut md = String::new();

    md.push_str("# Local SEO Sitemap Gap Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Business**: {}\n", report.business_name));
    md.push_str(&format!("- **Website**: {}\n", report.site.base_url));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(hash) = report.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    push_inventory_section(&mut md, "Site Inventory", report.site);

    // Gap summary
    let missing = report.gap.missing();
    let present = report.gap.present();
    let (missing_combos, total_combos) = report.gap.service_city_counts();

    md.push_str("## Gap Analysis\n\n");
    md.push_str(&format!("- **Missing pages**: {}\n", missing.len()));
    md.push_str(&format!("- **Already present**: {}\n", present.len()));
    md.push_str(&format!(
        "- **Service-in-city pages missing**: {}/{}\n\n",
        missing_combos, total_combos
    ));

    md.push_str("### Highest-Impact Missing Pages\n\n");
    push_page_table(&mut md, &missing);

    md.push_str("### Pages Detected That Match the Ideal Sitemap\n\n");
    push_page_table(&mut md, &present);

    if let Some(competitor) = report.competitor {
        md.push_str("## Competitor Snapshot\n\n");
        push_inventory_section(&mut md, "Competitor Inventory", competitor.inventory);

        md.push_str("### Competitor Pages Matching Ideal Sitemap\n\n");
        push_page_table(&mut md, &competitor.gap.present());

        md.push_str("### Competitor Pages Likely Missing\n\n");
        push_page_table(&mut md, &competitor.gap.missing());
    }

    md.push_str("---\n\n");
    md.push_str("*Generated by sitegap*\n");

    md
}

fn push_inventory_section(md: &mut String, heading: &str, inventory: &Inventory) {
    let diagnostics = &inventory.diagnostics;

    md.push_str(&format!("## {}\n\n", heading));
    md.push_str(&format!("- **Base URL**: {}\n", inventory.base_url));
    md.push_str(&format!("- **Source**: {}\n", inventory.source));
    md.push_str(&format!("- **Pages discovered**: {}\n", inventory.pages.len()));
    md.push_str(&format!(
        "- **Fetches**: {} attempted, {} failed, {} skipped\n",
        diagnostics.fetches_attempted, diagnostics.fetches_failed, diagnostics.pages_skipped
    ));
    if diagnostics.fetches_failed > 0 {
        md.push_str(&format!(
            "- **Failures**: {} timeouts, {} connection failures\n",
            diagnostics.timeouts, diagnostics.connect_failures
        ));
    }
    md.push_str(&format!("- **Sitemaps parsed**: {}\n", diagnostics.sitemaps_parsed));
    if diagnostics.sitemap_limit_reached {
        md.push_str("- **Note**: sitemap fetch limit reached; some sitemaps were not read\n");
    }
    if let Some(reason) = inventory.unknown_reason() {
        md.push_str(&format!(
            "- **Warning**: the inventory is unknown: {}\n",
            reason
        ));
    }
    md.push_str(&format!(
        "- **Duration**: {:.1} seconds\n\n",
        inventory.elapsed.as_secs_f64()
    ));
}

fn push_page_table(md: &mut String, pages: &[&IdealPage]) {
    if pages.is_empty() {
        md.push_str("*None*\n\n");
        return;
    }

    md.push_str("| Priority | Type | Label | Path | Reason |\n");
    md.push_str("|----------|------|-------|------|--------|\n");
    for page in pages {
        md.push_str(&format!(
            "| {} | {} | {} | `{}` | {} |\n",
            page.priority,
            page.page_type,
            escape_cell(&page.label),
            page.path,
            escape_cell(&page.reason)
        ));
    }
    md.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
