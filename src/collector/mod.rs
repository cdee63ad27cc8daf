//! The collection engine: per-player fetch with bounded retries, a durable
//! set of abandoned identifiers, and the sweep loop that re-drains that set.
//!
//! Every identifier from the catalogue ends up either as a `Players` row or
//! as a line in the failure-set file; nothing is dropped silently. All state
//! transitions are persisted as they happen, so a run can be killed at any
//! point and resumed with `retry_pending` against the on-disk set.

pub mod failures;
pub mod retry;
pub mod settings;

pub use failures::FailureSet;
pub use retry::{fetch_with_retry, FetchError, FetchOutcome};
pub use settings::{CollectorSettings, RetryPolicy};

use crate::cli::types::PlayerId;
use crate::error::Result;
use crate::nba::teams;
use crate::nba::types::{PlayerDetail, PlayerListing};
use crate::storage::models::ActivityStatus;
use crate::storage::NbaDatabase;
use std::collections::HashMap;
use std::future::Future;
use tokio::time::sleep;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Players fetched and stored during this run.
    pub captured: usize,
    /// Catalogue entries already in the store, skipped without a fetch.
    pub already_present: usize,
    /// Identifiers left in the failure set when the run ended.
    pub abandoned: usize,
    /// Teams written by the reference load.
    pub teams_loaded: usize,
}

enum ProcessOutcome {
    Captured,
    AlreadyPresent,
    Failed,
}

/// Owns the database handle and the failure set for the process lifetime
/// and drives the fetch-retry-persist cycle over a player catalogue.
pub struct Collector {
    db: NbaDatabase,
    failures: FailureSet,
    settings: CollectorSettings,
}

impl Collector {
    pub fn new(db: NbaDatabase, failures: FailureSet, settings: CollectorSettings) -> Self {
        Self {
            db,
            failures,
            settings,
        }
    }

    pub fn db(&self) -> &NbaDatabase {
        &self.db
    }

    pub fn failures(&self) -> &FailureSet {
        &self.failures
    }

    /// Give the database and failure set back, e.g. to hand the store to a
    /// browsing front end after the run.
    pub fn into_parts(self) -> (NbaDatabase, FailureSet) {
        (self.db, self.failures)
    }

    /// Full run: every catalogue entry through the retry worker, then the
    /// sweep loop over leftovers, then the team reference load.
    ///
    /// The caller has already done the bulk catalogue pull; its failure is
    /// fatal to the run and never reaches this point.
    pub async fn collect<F, Fut>(
        &mut self,
        catalogue: &[PlayerListing],
        fetch: F,
    ) -> Result<CollectionSummary>
    where
        F: Fn(PlayerId) -> Fut,
        Fut: Future<Output = std::result::Result<PlayerDetail, FetchError>>,
    {
        let activity = activity_map(catalogue);

        let mut captured = 0;
        let mut already_present = 0;
        for listing in catalogue {
            match self.process_player(listing.id, &activity, &fetch).await? {
                ProcessOutcome::Captured => captured += 1,
                ProcessOutcome::AlreadyPresent => already_present += 1,
                ProcessOutcome::Failed => {}
            }
        }

        captured += self.run_until_empty(&activity, &fetch).await?;
        let teams_loaded = self.load_teams()?;

        Ok(CollectionSummary {
            captured,
            already_present,
            abandoned: self.failures.len(),
            teams_loaded,
        })
    }

    /// Resume an interrupted run: only the identifiers persisted in the
    /// failure set go through the sweep loop. The catalogue is still needed
    /// for the activity flags.
    pub async fn retry_pending<F, Fut>(
        &mut self,
        catalogue: &[PlayerListing],
        fetch: F,
    ) -> Result<CollectionSummary>
    where
        F: Fn(PlayerId) -> Fut,
        Fut: Future<Output = std::result::Result<PlayerDetail, FetchError>>,
    {
        let activity = activity_map(catalogue);
        let captured = self.run_until_empty(&activity, &fetch).await?;

        Ok(CollectionSummary {
            captured,
            already_present: 0,
            abandoned: self.failures.len(),
            teams_loaded: 0,
        })
    }

    /// Sweep the failure set through the retry worker until it empties or
    /// the sweep cap is hit. Returns how many players were recovered.
    ///
    /// Each sweep works on a snapshot, so removals during the sweep do not
    /// disturb iteration. Sweeps after the first wait out the cooldown
    /// first; an unreachable source is retried on a schedule, not in a
    /// tight loop.
    pub async fn run_until_empty<F, Fut>(
        &mut self,
        activity: &HashMap<PlayerId, ActivityStatus>,
        fetch: &F,
    ) -> Result<usize>
    where
        F: Fn(PlayerId) -> Fut,
        Fut: Future<Output = std::result::Result<PlayerDetail, FetchError>>,
    {
        let mut recovered = 0;
        let mut sweeps = 0;

        while !self.failures.is_empty() && sweeps < self.settings.max_sweeps {
            if sweeps > 0 && !self.settings.sweep_cooldown.is_zero() {
                sleep(self.settings.sweep_cooldown).await;
            }
            sweeps += 1;

            if self.settings.verbose {
                println!(
                    "Retrying {} skipped players (sweep {}/{})",
                    self.failures.len(),
                    sweeps,
                    self.settings.max_sweeps
                );
            }

            for id in self.failures.snapshot() {
                if matches!(
                    self.process_player(id, activity, fetch).await?,
                    ProcessOutcome::Captured
                ) {
                    recovered += 1;
                }
            }
        }

        if self.failures.is_empty() && self.settings.verbose {
            println!("All skipped players processed.");
        }

        Ok(recovered)
    }

    /// Bulk-load the static team catalogue. Idempotent; re-runs are no-ops.
    pub fn load_teams(&mut self) -> Result<usize> {
        let mut loaded = 0;
        for team in teams::all_teams() {
            if self.db.insert_team(&team)? {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// One identifier through the retry worker, with both outcomes
    /// persisted before returning: success goes to the store and clears
    /// the failure set; exhaustion is recorded in the failure set.
    async fn process_player<F, Fut>(
        &mut self,
        id: PlayerId,
        activity: &HashMap<PlayerId, ActivityStatus>,
        fetch: &F,
    ) -> Result<ProcessOutcome>
    where
        F: Fn(PlayerId) -> Fut,
        Fut: Future<Output = std::result::Result<PlayerDetail, FetchError>>,
    {
        if self.db.player_exists(id)? {
            // Heals the transient in-both state if the process died
            // between the insert and the failure-set update.
            self.failures.mark_success(id)?;
            return Ok(ProcessOutcome::AlreadyPresent);
        }

        if self.settings.verbose {
            println!("Fetching info for player ID: {id}");
        }

        match fetch_with_retry(id, fetch, &self.settings.retry).await {
            FetchOutcome::Success(detail) => {
                let is_active = activity
                    .get(&id)
                    .copied()
                    .unwrap_or(ActivityStatus::Unknown);
                self.db.insert_player(&detail.into_record(is_active))?;
                self.failures.mark_success(id)?;

                if !self.settings.pacing_delay.is_zero() {
                    sleep(self.settings.pacing_delay).await;
                }
                Ok(ProcessOutcome::Captured)
            }
            FetchOutcome::Exhausted => {
                self.failures.mark_failed(id)?;
                Ok(ProcessOutcome::Failed)
            }
        }
    }
}

fn activity_map(catalogue: &[PlayerListing]) -> HashMap<PlayerId, ActivityStatus> {
    catalogue
        .iter()
        .map(|listing| (listing.id, listing.roster_status))
        .collect()
}
