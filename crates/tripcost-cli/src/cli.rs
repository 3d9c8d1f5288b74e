//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tripcost_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tripcost")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vessel trip cost, revenue and profit calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging to stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a trip for a stored vessel
    Calculate {
        /// Vessel id or name
        #[arg(long)]
        vessel: String,

        /// Trip input file with [loading] and [discharging] tables (.toml or .json)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Save the result as a trip report
        #[arg(long)]
        save: bool,

        /// Report title (with --save)
        #[arg(long)]
        title: Option<String>,

        /// Report notes (with --save)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Manage vessel documents
    Vessel {
        #[command(subcommand)]
        action: VesselAction,
    },

    /// Manage saved trip reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum VesselAction {
    /// List vessels (trip-eligible only unless --all)
    List {
        /// Include vessels with missing technical fields
        #[arg(long)]
        all: bool,
    },

    /// Show one vessel
    Show {
        /// Vessel id or name
        id: String,
    },

    /// Add vessels from a fleet TOML file
    Add {
        /// Fleet file with [[vessels]] entries
        #[arg(long)]
        file: PathBuf,
    },

    /// Import vessel documents (csv, json, toml), replacing existing ids
    Import {
        /// Input file
        file: PathBuf,

        /// Show what would be imported without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove a vessel
    Remove {
        /// Vessel id or name
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// List saved reports, newest first
    List {
        /// Only reports for this vessel (id or name)
        #[arg(long)]
        vessel: Option<String>,

        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Show one report
    Show {
        /// Report id
        id: String,
    },

    /// Attach a file to a report
    Attach {
        /// Report id
        id: String,

        /// File to attach
        file: PathBuf,
    },

    /// Remove a report
    Remove {
        /// Report id
        id: String,
    },
}
