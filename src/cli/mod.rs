//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Collection tuning flags shared by `collect` and `retry`.
#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Path to the SQLite database (defaults to the user cache directory).
    #[clap(long)]
    pub db: Option<PathBuf>,

    /// Path to the skipped-player file (defaults next to the database).
    #[clap(long)]
    pub skipped_file: Option<PathBuf>,

    /// Attempts per player before it is recorded as skipped.
    #[clap(long, default_value_t = 3)]
    pub max_attempts: u32,

    /// Retry sweeps over the skipped set before giving up for this run.
    #[clap(long, default_value_t = 10)]
    pub max_sweeps: u32,

    /// Print per-player progress.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-info", about = "Collect NBA player and team data into a local database")]
pub struct NbaInfo {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a full collection: catalogue pull, per-player fetch, retry
    /// sweeps over leftovers, then the team reference load.
    Collect {
        #[clap(flatten)]
        args: CollectArgs,
    },

    /// Retry only the players recorded in the skipped-player file.
    ///
    /// Useful after an interrupted or partially failed `collect`; the
    /// file on disk is the complete remaining work list.
    Retry {
        #[clap(flatten)]
        args: CollectArgs,
    },

    /// List captured players.
    Players {
        /// Path to the SQLite database (defaults to the user cache directory).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Only show players marked Active in the catalogue.
        #[clap(long)]
        active: bool,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List captured teams, ordered by nickname.
    Teams {
        /// Path to the SQLite database (defaults to the user cache directory).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
