//! Console statistics for inventory runs

use crate::inventory::Inventory;
use crate::output::gap::GapReport;

/// Prints inventory statistics to stdout
pub fn print_statistics(label: &str, inventory: &Inventory) {
    let diagnostics = &inventory.diagnostics;

    println!("=== {} ===\n", label);
    println!("  Base URL: {}", inventory.base_url);
    println!("  Source: {}", inventory.source);
    println!("  Pages discovered: {}", inventory.pages.len());
    println!("  Fetches attempted: {}", diagnostics.fetches_attempted);
    println!("  Fetches failed: {}", diagnostics.fetches_failed);
    if diagnostics.fetches_failed > 0 {
        println!(
            "    ({} timeouts, {} connection failures)",
            diagnostics.timeouts, diagnostics.connect_failures
        );
    }
    println!("  Pages skipped: {}", diagnostics.pages_skipped);
    if diagnostics.sitemaps_parsed > 0 {
        println!("  Sitemaps parsed: {}", diagnostics.sitemaps_parsed);
    }
    if diagnostics.sitemap_limit_reached {
        println!("  Sitemap fetch limit reached");
    }
    println!("  Duration: {:.1}s", inventory.elapsed.as_secs_f64());

    let success_rate = if diagnostics.fetches_attempted > 0 {
        (inventory.pages.len() as f64 / diagnostics.fetches_attempted as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "  Success Rate: {:.1}% ({} / {} fetches produced a page)\n",
        success_rate,
        inventory.pages.len(),
        diagnostics.fetches_attempted
    );
}

/// Prints the gap summary to stdout
pub fn print_gap_summary(business_name: &str, gap: &GapReport) {
    let (missing_combos, total_combos) = gap.service_city_counts();

    println!("=== Gap Analysis ===\n");
    println!(
        "  Missing pages: {} | Already present: {}",
        gap.missing().len(),
        gap.present().len()
    );
    println!(
        "  {} is missing {}/{} high-impact service-in-city pages\n",
        business_name, missing_combos, total_combos
    );

    for page in gap.missing().iter().take(10) {
        println!("  [{:>3}] {:<40} {}", page.priority, page.path, page.label);
    }
    println!();
}
