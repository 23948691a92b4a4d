//! Command implementation for the munro catalog CLI
//!
//! Loads the dataset, applies the filter criteria from the command line, and
//! renders the matching records as a table or JSON.

use crate::cli::args::{Args, OutputFormat};
use crate::{Dataset, Result};
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Run the catalog command
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let start = Instant::now();
    let (dataset, stats) = Dataset::load_with_stats(&args.data_path)?;
    debug!(
        "Load pass: {} rows read, {} skipped in {:.2?}",
        stats.rows_read,
        stats.rows_skipped,
        start.elapsed()
    );

    let criteria = args.criteria();
    let results = dataset.filter(&criteria);
    info!(
        "{} of {} records match the criteria",
        results.len(),
        dataset.len()
    );

    match args.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Table => print_table(&results),
    }

    Ok(())
}

/// Initialize tracing output to stderr
///
/// Respects `RUST_LOG` when set; otherwise derives the filter from the
/// verbosity flags. Logging goes to stderr so JSON output stays pipeable.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("munro_catalog={}", args.log_level())));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", args.log_level());
}

fn print_json(results: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(results.records())?;
    println!("{json}");
    Ok(())
}

fn print_table(results: &Dataset) {
    if results.is_empty() {
        println!("{}", "No summits match the given criteria.".yellow());
        return;
    }

    println!(
        "{:>4}  {:<30} {:>9} {:<6} {:<8} {:>10} {:>10}",
        "No".bold(),
        "Name".bold(),
        "Height".bold(),
        "Class".bold(),
        "Section".bold(),
        "Latitude".bold(),
        "Longitude".bold()
    );

    for munro in results {
        let (lat, lon) = match munro.location() {
            Some((lat, lon)) => (format!("{lat:.5}"), format!("{lon:.5}")),
            None => ("-".to_string(), "-".to_string()),
        };

        println!(
            "{:>4}  {:<30} {:>8}m {:<6} {:<8} {:>10} {:>10}",
            munro.running_no,
            munro.name,
            munro.height_m,
            munro.classification.to_string(),
            munro.smc_section,
            lat,
            lon
        );
    }

    println!();
    println!("{} summits", results.len().to_string().green().bold());
}
