//! Command implementations for the pin timeline CLI.
//!
//! Provides subcommands for laying files out on a timeline, computing
//! inclusive durations and grouping files by project/data type/station.

use clap::{Args, Subcommand};
use pin_timeline::DashConvention;
use std::path::PathBuf;
use std::str::FromStr;

pub mod duration;
pub mod groups;
pub mod input;
pub mod timeline;

/// Where file date ranges come from, plus shared configuration.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Directory of CSV exports to scan
    #[arg(short = 'd', long, conflicts_with = "manifest", required_unless_present = "manifest")]
    pub dir: Option<PathBuf>,

    /// JSON manifest of file records with stored date ranges
    #[arg(short = 'm', long)]
    pub manifest: Option<PathBuf>,

    /// JSON timeline configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Override the configured reading of dash-delimited dates (ymd or ydm)
    #[arg(long, value_parser = DashConvention::from_str)]
    pub dash_convention: Option<DashConvention>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute timeline bounds and bar geometry for a set of files
    Timeline {
        #[command(flatten)]
        source: SourceArgs,

        /// Only show months some file actually touches
        #[arg(long)]
        sparse_months: bool,

        /// Drop files that end before this date
        #[arg(long)]
        from: Option<String>,

        /// Drop files that start after this date
        #[arg(long)]
        to: Option<String>,

        /// Print the layout as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inclusive day count between two dates
    Duration {
        start: String,
        end: String,

        /// Reading of dash-delimited dates (ymd or ydm)
        #[arg(long, default_value = "ymd", value_parser = DashConvention::from_str)]
        dash_convention: DashConvention,
    },

    /// Group files by Project_DataType_Station and show each group's date envelope
    Groups {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the grouping as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Timeline {
            source,
            sparse_months,
            from,
            to,
            json,
        } => {
            let window = (from.as_deref(), to.as_deref());
            timeline::run_timeline(&source, sparse_months, window, json).await
        }
        Command::Duration {
            start,
            end,
            dash_convention,
        } => {
            println!("{}", duration::describe_duration(&start, &end, dash_convention));
            Ok(())
        }
        Command::Groups { source, json } => groups::run_groups(&source, json).await,
    }
}
