//! sitegap main entry point
//!
//! This is the command-line interface for the local-SEO sitemap gap analyzer.

use anyhow::Context;
use clap::Parser;
use sitegap::config::{load_config_with_hash, Config};
use sitegap::ideal::{build_ideal_sitemap, split_list, UrlPattern};
use sitegap::inventory::InventoryBuilder;
use sitegap::output::{
    print_gap_summary, print_statistics, write_ideal_csv, write_markdown_report,
    write_pages_csv, CompetitorSection, GapReport, ReportContext, DISCOVERED_PAGES_CSV,
    IDEAL_SITEMAP_CSV, MISSING_PAGES_CSV, REPORT_MARKDOWN,
};
use sitegap::url::normalize_base_url;
use sitegap::SiteGapError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitegap: local SEO sitemap gap analyzer
///
/// Generates an ideal local-SEO sitemap (base pages, hubs, service and city
/// pages, service-in-city pages), discovers the pages a website already
/// publishes, and reports which ideal pages are missing.
#[derive(Parser, Debug)]
#[command(name = "sitegap")]
#[command(version)]
#[command(about = "Local SEO sitemap gap analyzer", long_about = None)]
struct Cli {
    /// Website to analyze (scheme defaults to https://)
    #[arg(value_name = "WEBSITE")]
    website: String,

    /// Services offered (comma, semicolon or newline separated)
    #[arg(long, default_value = "")]
    services: String,

    /// Cities served (comma, semicolon or newline separated)
    #[arg(long, default_value = "")]
    cities: String,

    /// URL pattern for service-in-city pages
    #[arg(long, value_enum, default_value_t = UrlPattern::CityService)]
    pattern: UrlPattern,

    /// Business name used in the report
    #[arg(long)]
    business_name: Option<String>,

    /// Competitor website to compare against the same ideal sitemap
    #[arg(long)]
    competitor: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory for CSV exports and the markdown report
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    run(cli, config, config_hash).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegap=info,warn"),
            1 => EnvFilter::new("sitegap=debug,info"),
            2 => EnvFilter::new("sitegap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Generates the ideal sitemap, builds inventories, and writes the reports
async fn run(cli: Cli, config: Config, config_hash: Option<String>) -> anyhow::Result<()> {
    let base_url = normalize_base_url(&cli.website)?;
    let competitor_url = cli
        .competitor
        .as_deref()
        .map(normalize_base_url)
        .transpose()?;

    let services = split_list(&cli.services);
    let cities = split_list(&cli.cities);
    let business_name = cli
        .business_name
        .clone()
        .unwrap_or_else(|| "Your business".to_string());

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("Failed to create output directory {}", cli.output_dir.display())
    })?;

    // Ideal sitemap
    let ideal = build_ideal_sitemap(&services, &cities, cli.pattern);
    tracing::info!(
        "Ideal sitemap: {} pages ({} services x {} cities)",
        ideal.len(),
        services.len(),
        cities.len()
    );
    write_ideal_csv(&cli.output_dir.join(IDEAL_SITEMAP_CSV), &ideal)?;

    // Inventories; the competitor run is independent and proceeds alongside
    let builder = InventoryBuilder::new(&config)?;
    let (site, competitor) = match &competitor_url {
        Some(url) => {
            let (site, rival) =
                tokio::join!(builder.build_inventory(&base_url), builder.build_inventory(url));
            (site, Some(rival))
        }
        None => (builder.build_inventory(&base_url).await, None),
    };

    print_statistics("Site Inventory", &site);
    if let Some(reason) = site.unknown_reason() {
        tracing::error!(
            "No pages found: {} ({} of {} fetches failed)",
            reason,
            site.diagnostics.fetches_failed,
            site.diagnostics.fetches_attempted
        );
        return Err(SiteGapError::InventoryUnknown {
            url: base_url.to_string(),
        }
        .into());
    }
    write_pages_csv(&cli.output_dir.join(DISCOVERED_PAGES_CSV), &site.pages)?;

    // Gap analysis
    let gap = GapReport::for_inventory(&ideal, &site);
    print_gap_summary(&business_name, &gap);
    write_ideal_csv(&cli.output_dir.join(MISSING_PAGES_CSV), gap.missing())?;

    let competitor_gap = competitor
        .as_ref()
        .map(|rival| (rival, GapReport::for_inventory(&ideal, rival)));
    if let Some((rival, _)) = &competitor_gap {
        print_statistics("Competitor Inventory", rival);
    }

    let report = ReportContext {
        business_name: &business_name,
        site: &site,
        gap: &gap,
        competitor: competitor_gap
            .as_ref()
            .map(|(rival, rival_gap)| CompetitorSection {
                inventory: *rival,
                gap: rival_gap,
            }),
        config_hash: config_hash.as_deref(),
        generated_at: chrono::Utc::now(),
    };
    let report_path = cli.output_dir.join(REPORT_MARKDOWN);
    write_markdown_report(&report, &report_path)?;

    tracing::info!("Reports written to {}", cli.output_dir.display());
    println!("✓ Report written to: {}", report_path.display());

    Ok(())
}
