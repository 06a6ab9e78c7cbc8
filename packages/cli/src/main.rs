#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tools for the FIR desk backend.
//!
//! Runs the analytics pipeline, the case history browser, or a corpus
//! normalization check against a JSON corpus file, printing the result as
//! pretty JSON. Without `--corpus` the embedded sample corpus is used.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use fir_desk_analytics_models::FilterCriteria;
use fir_desk_registry::browse::{BrowseQuery, SortKey, SortOrder};
use fir_desk_registry::{CaseRegister, browse, corpus, sample_register};

#[derive(Parser)]
#[command(name = "fir_desk_cli", about = "FIR desk analytics and browsing tools")]
struct Cli {
    /// JSON corpus file. Falls back to the embedded sample corpus.
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analytics recompute cycle and print the dashboard summary
    Dashboard {
        /// Time window token: 1month, 3months, 6months, or 1year
        #[arg(long)]
        time_range: Option<String>,
        /// Exact area name, or "All"
        #[arg(long)]
        area: Option<String>,
        /// Exact crime category name, or "All"
        #[arg(long)]
        category: Option<String>,
    },
    /// Search, filter, and sort the case history
    Browse {
        /// Case-insensitive free-text search term
        #[arg(long)]
        search: Option<String>,
        /// Exact status, e.g. "Under Investigation", or "All"
        #[arg(long)]
        status: Option<String>,
        /// Sort column: date, firNumber, complainantName, policeStation, status
        #[arg(long)]
        sort_by: Option<String>,
        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<String>,
    },
    /// Load a corpus and report accepted/dropped record counts
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            time_range,
            area,
            category,
        } => {
            let register = load_register(cli.corpus.as_deref())?;
            let criteria = FilterCriteria::from_params(
                time_range.as_deref(),
                area.as_deref(),
                category.as_deref(),
            );
            let today = Utc::now().date_naive();
            let summary = fir_desk_analytics::dashboard(register.cases(), &criteria, today);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Browse {
            search,
            status,
            sort_by,
            order,
        } => {
            let register = load_register(cli.corpus.as_deref())?;
            let query = BrowseQuery {
                search: search.filter(|s| !s.trim().is_empty()),
                status: status.filter(|s| s != FilterCriteria::WILDCARD),
                sort_key: sort_by
                    .as_deref()
                    .and_then(|key| key.parse::<SortKey>().ok())
                    .unwrap_or_default(),
                sort_order: order
                    .as_deref()
                    .and_then(|order| order.parse::<SortOrder>().ok())
                    .unwrap_or_default(),
            };
            let matches = browse::browse(register.cases(), &query);
            log::info!("Matched {} of {} cases", matches.len(), register.len());
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Commands::Check => {
            let report = match cli.corpus.as_deref() {
                Some(path) => {
                    let json = std::fs::read_to_string(path)?;
                    corpus::load_corpus(&json)?
                }
                None => corpus::load_corpus(fir_desk_registry::SAMPLE_CASES_JSON)?,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "accepted": report.accepted,
                    "dropped": report.dropped,
                }))?
            );
        }
    }

    Ok(())
}

/// Loads a register from a corpus file, or the embedded sample corpus when
/// no path is given.
fn load_register(
    path: Option<&std::path::Path>,
) -> Result<CaseRegister, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let report = corpus::load_corpus(&json)?;
            if report.dropped > 0 {
                log::warn!("Dropped {} defective corpus records", report.dropped);
            }
            Ok(CaseRegister::from_cases(report.cases))
        }
        None => Ok(sample_register()),
    }
}
