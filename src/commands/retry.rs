//! Re-drain the persisted skipped-player set.

use super::{print_summary, resolve_db_path, resolve_skipped_path};
use crate::cli::CollectArgs;
use crate::collector::{Collector, CollectorSettings, FailureSet, RetryPolicy};
use crate::error::Result;
use crate::nba::http::{fetch_player_detail, list_players, stats_client};
use crate::storage::NbaDatabase;

/// Resume after an interrupted or partially failed `collect`: only the
/// identifiers recorded on disk are fetched. The catalogue is still pulled
/// once, because the active flag only exists in the bulk listing.
pub async fn handle_retry(args: CollectArgs) -> Result<()> {
    let db_path = resolve_db_path(&args.db)?;
    let skipped_path = resolve_skipped_path(&args.skipped_file, &db_path);

    let failures = FailureSet::load(&skipped_path)?;
    if failures.is_empty() {
        println!("No skipped players to retry.");
        return Ok(());
    }
    println!("Retrying {} skipped players...", failures.len());

    let db = NbaDatabase::open_at(&db_path)?;
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
    let catalogue = list_players(&client).await?;

    let summary = collector
        .retry_pending(&catalogue, |id| fetch_player_detail(&client, id))
        .await?;

    print_summary(&summary);
    Ok(())
}
