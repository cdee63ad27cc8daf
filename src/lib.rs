//! NBA Info Collector Library
//!
//! Collects the full NBA player and team catalogue from stats.nba.com into a
//! local SQLite database, with durable retry tracking so an interrupted run
//! resumes where it left off instead of re-fetching captured players.
//!
//! ## How a run works
//!
//! - **Catalogue pull**: one bulk call lists every player identifier plus
//!   its roster flag. This call failing aborts the run; nothing else does.
//! - **Fetch-retry worker**: each player's detail fetch gets a bounded number
//!   of attempts with randomized backoff; network-layer failures retry,
//!   anything else gives up immediately.
//! - **Durable failure set**: identifiers that exhaust their attempts land
//!   in a write-through on-disk set (`skipped_players.txt`), so a crash
//!   never loses track of remaining work.
//! - **Convergence sweeps**: the failure set is re-swept through the worker
//!   until it empties or the sweep cap is hit.
//! - **Idempotent store**: player and team rows are insert-if-absent only;
//!   duplicate inserts are absorbed, captured rows are never updated.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use nba_info::{Collector, CollectorSettings, FailureSet};
//! use nba_info::nba::http::{fetch_player_detail, list_players, stats_client};
//! use nba_info::storage::NbaDatabase;
//!
//! # async fn example() -> nba_info::Result<()> {
//! let db = NbaDatabase::new()?;
//! let failures = FailureSet::load(std::path::Path::new("skipped_players.txt"))?;
//! let mut collector = Collector::new(db, failures, CollectorSettings::default());
//!
//! let client = stats_client()?;
//! let catalogue = list_players(&client).await?;
//! let summary = collector
//!     .collect(&catalogue, |id| fetch_player_detail(&client, id))
//!     .await?;
//! println!("captured {}, abandoned {}", summary.captured, summary.abandoned);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod commands;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, TeamId};
pub use collector::{
    CollectionSummary, Collector, CollectorSettings, FailureSet, FetchError, FetchOutcome,
    RetryPolicy,
};
pub use error::{NbaError, Result};
pub use storage::{ActivityStatus, PlayerRecord, TeamRecord};
