//! Command line argument parsing.
//!
//! Two subcommands over the same batch-file input:
//! - `analyze`: print the full ranking with score breakdowns
//! - `suggest`: print only the top picks to work on next

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskrank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank a batch of tasks by multi-factor priority scoring")]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score every task in a batch file and print the ranking
    Analyze {
        /// JSON batch: a task array, or {"tasks": [...], "strategy": "..."}
        file: PathBuf,
        /// Weighting strategy; overrides the batch file's own, and unknown
        /// names fall back to smart_balance
        #[arg(short, long)]
        strategy: Option<String>,
        /// Reference date (YYYY-MM-DD) for urgency scoring; defaults to the
        /// current date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Human-readable table instead of JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the top tasks to work on next
    Suggest {
        /// JSON batch: a task array, or {"tasks": [...], "strategy": "..."}
        file: PathBuf,
        /// Weighting strategy; overrides the batch file's own
        #[arg(short, long)]
        strategy: Option<String>,
        /// Reference date (YYYY-MM-DD) for urgency scoring
        #[arg(long)]
        today: Option<NaiveDate>,
        /// How many tasks to suggest
        #[arg(short = 'n', long, default_value_t = 3)]
        limit: usize,
        /// Show the top picks under every registered strategy
        #[arg(long)]
        all_strategies: bool,
    },
}
