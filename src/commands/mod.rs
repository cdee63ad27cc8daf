//! Command implementations for the nba-info CLI.

pub mod collect;
pub mod retry;
pub mod show;

use crate::collector::CollectionSummary;
use crate::error::Result;
use crate::storage::NbaDatabase;
use std::path::{Path, PathBuf};

/// Resolve the database path, falling back to the cache-directory default.
pub fn resolve_db_path(db: &Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path.clone()),
        None => NbaDatabase::default_path(),
    }
}

/// The skipped-player file defaults to sitting next to the database, so one
/// `--db` override relocates all run state together.
pub fn resolve_skipped_path(skipped: &Option<PathBuf>, db_path: &Path) -> PathBuf {
    match skipped {
        Some(path) => path.clone(),
        None => match db_path.parent() {
            Some(parent) => parent.join("skipped_players.txt"),
            None => PathBuf::from("skipped_players.txt"),
        },
    }
}

/// Final per-run report: captured vs. abandoned counts.
pub fn print_summary(summary: &CollectionSummary) {
    println!("✓ Collection complete");
    println!("  players captured:   {}", summary.captured);
    println!("  already present:    {}", summary.already_present);
    println!("  abandoned (skipped): {}", summary.abandoned);
    if summary.teams_loaded > 0 {
        println!("  teams loaded:       {}", summary.teams_loaded);
    }
}
