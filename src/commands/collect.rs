//! Full collection run.

use super::{print_summary, resolve_db_path, resolve_skipped_path};
use crate::cli::CollectArgs;
use crate::collector::{Collector, CollectorSettings, FailureSet, RetryPolicy};
use crate::error::Result;
use crate::nba::http::{fetch_player_detail, list_players, stats_client};
use crate::storage::NbaDatabase;

/// Pull the full player catalogue, fetch every player not yet stored,
/// sweep the leftovers, then load the team reference data.
///
/// The catalogue pull itself is all-or-nothing: if it fails, nothing has
/// been committed yet and the error aborts the run. Every later failure is
/// contained at the player level.
pub async fn handle_collect(args: CollectArgs) -> Result<()> {
    let db_path = resolve_db_path(&args.db)?;
    let skipped_path = resolve_skipped_path(&args.skipped_file, &db_path);

    let db = NbaDatabase::open_at(&db_path)?;
    let failures = FailureSet::load(&skipped_path)?;
    let settings = CollectorSettings {
        retry: RetryPolicy {
            max_attempts: args.max_attempts,
            ..RetryPolicy::default()
        },
        max_sweeps: args.max_sweeps,
        verbose: args.verbose,
        ..CollectorSettings::default()
    };
    let mut collector = Collector::new(db, failures, settings);

    let client = stats_client()?;
    if args.verbose {
        println!("Pulling player catalogue from stats.nba.com...");
    }
    let catalogue = list_players(&client).await?;
    println!("Catalogue: {} players", catalogue.len());

    let summary = collector
        .collect(&catalogue, |id| fetch_player_detail(&client, id))
        .await?;

    print_summary(&summary);
    Ok(())
}
