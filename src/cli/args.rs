//! Command-line argument definitions for the munro catalog
//!
//! This module defines the CLI interface using the clap derive API. The four
//! filter flags mirror the query criteria the library accepts and are passed
//! through as raw strings, so the engine's tolerance rules (malformed bound
//! ignored, absent flag unconstrained) apply unchanged.

use crate::FilterCriteria;
use crate::constants::DEFAULT_DATA_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the munro catalog
///
/// Loads the munrotab CSV into memory, applies the requested filter criteria,
/// and prints the matching summits.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "munro-catalog",
    version,
    about = "Query the Scottish Munro summit tables from the command line",
    long_about = "Loads the Database of British and Irish Hills munrotab CSV into an \
                  in-memory catalog, derives WGS84 coordinates from each record's OS \
                  National Grid reference, and prints the summits matching the given \
                  filter criteria."
)]
pub struct Args {
    /// Path to the munrotab CSV file
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the munrotab CSV file"
    )]
    pub data_path: PathBuf,

    /// Keep only records with this listing status (Munro, Top or Other)
    #[arg(long, value_name = "STATUS")]
    pub classification: Option<String>,

    /// Keep only records at least this tall, in meters
    #[arg(long = "min-height", value_name = "METERS")]
    pub min_height: Option<String>,

    /// Keep only records whose SMC section contains this text
    #[arg(long, value_name = "TEXT")]
    pub section: Option<String>,

    /// Keep only records whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Output format for matching records
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Suppress log output except warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array of records
    Json,
}

impl Args {
    /// Filter criteria assembled from the CLI flags
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            classification: self.classification.clone(),
            min_height: self.min_height.clone(),
            section: self.section.clone(),
            search: self.search.clone(),
        }
    }

    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["munro-catalog"]);
        assert_eq!(args.data_path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.criteria().is_unconstrained());
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_filter_flags_map_to_criteria() {
        let args = Args::parse_from([
            "munro-catalog",
            "--classification",
            "Munro",
            "--min-height",
            "1000",
            "--section",
            "4.B",
            "--search",
            "ben",
        ]);

        let criteria = args.criteria();
        assert_eq!(criteria.classification.as_deref(), Some("Munro"));
        assert_eq!(criteria.min_height.as_deref(), Some("1000"));
        assert_eq!(criteria.section.as_deref(), Some("4.B"));
        assert_eq!(criteria.search.as_deref(), Some("ben"));
    }

    #[test]
    fn test_log_levels() {
        let args = Args::parse_from(["munro-catalog", "-q"]);
        assert_eq!(args.log_level(), "warn");

        let args = Args::parse_from(["munro-catalog", "-v"]);
        assert_eq!(args.log_level(), "debug");

        let args = Args::parse_from(["munro-catalog", "-vv"]);
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn test_json_format_flag() {
        let args = Args::parse_from(["munro-catalog", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
