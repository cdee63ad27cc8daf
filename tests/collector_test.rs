//! End-to-end tests for the collection engine, using stub fetch functions
//! instead of the network.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use nba_info::nba::types::{PlayerDetail, PlayerListing};
use nba_info::storage::NbaDatabase;
use nba_info::{
    ActivityStatus, Collector, CollectorSettings, FailureSet, FetchError, NbaError, PlayerId,
};
use tempfile::{tempdir, TempDir};

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Succeed,
    Transient,
    Fatal,
}

fn detail(id: PlayerId) -> PlayerDetail {
    PlayerDetail {
        player_id: id,
        full_name: format!("Player {id}"),
        jersey_num: Some("0".to_string()),
        team_name: "Los Angeles Lakers".to_string(),
        team_ab: "LAL".to_string(),
        pos: "Guard".to_string(),
        height: "6-6".to_string(),
        weight: "200".to_string(),
        country: Some("USA".to_string()),
    }
}

fn listing(id: u64, roster_status: ActivityStatus) -> PlayerListing {
    PlayerListing {
        id: PlayerId::new(id),
        roster_status,
    }
}

fn fetch_stub(
    behaviors: HashMap<u64, Behavior>,
) -> impl Fn(PlayerId) -> std::future::Ready<Result<PlayerDetail, FetchError>> {
    move |id: PlayerId| {
        let behavior = *behaviors.get(&id.as_u64()).unwrap_or(&Behavior::Succeed);
        std::future::ready(match behavior {
            Behavior::Succeed => Ok(detail(id)),
            Behavior::Transient => Err(FetchError::Transient(NbaError::NoData)),
            Behavior::Fatal => Err(FetchError::Fatal(NbaError::NoData)),
        })
    }
}

fn skipped_path(dir: &TempDir) -> PathBuf {
    dir.path().join("skipped_players.txt")
}

fn new_collector(dir: &TempDir, max_sweeps: u32) -> Collector {
    let db = NbaDatabase::new_in_memory().unwrap();
    let failures = FailureSet::load(&skipped_path(dir)).unwrap();
    Collector::new(db, failures, CollectorSettings::immediate(3, max_sweeps))
}

/// Catalogue [1, 2, 3]; 1 succeeds, 2 is transient on every attempt,
/// 3 fails fatally: the store ends with {1} and the failure set with {2, 3}.
#[tokio::test]
async fn one_success_one_transient_one_fatal() {
    let dir = tempdir().unwrap();
    let mut collector = new_collector(&dir, 2);

    let catalogue = vec![
        listing(1, ActivityStatus::Active),
        listing(2, ActivityStatus::Active),
        listing(3, ActivityStatus::NotActive),
    ];
    let fetch = fetch_stub(HashMap::from([
        (1, Behavior::Succeed),
        (2, Behavior::Transient),
        (3, Behavior::Fatal),
    ]));

    let summary = collector.collect(&catalogue, fetch).await.unwrap();

    assert_eq!(summary.captured, 1);
    assert_eq!(summary.already_present, 0);
    assert_eq!(summary.abandoned, 2);
    assert_eq!(summary.teams_loaded, 30);

    let (db, failures) = collector.into_parts();
    assert!(db.player_exists(PlayerId::new(1)).unwrap());
    assert!(!db.player_exists(PlayerId::new(2)).unwrap());
    assert!(failures.contains(PlayerId::new(2)));
    assert!(failures.contains(PlayerId::new(3)));

    // Every catalogue id ends in exactly one of store / failure set.
    for id in [1, 2, 3] {
        let id = PlayerId::new(id);
        assert_ne!(db.player_exists(id).unwrap(), failures.contains(id));
    }

    // The stored record carries the catalogue's activity flag.
    let players = db.all_players().unwrap();
    assert_eq!(players[0].is_active, ActivityStatus::Active);
}

/// The failure set on disk reflects every mutation the moment it returns;
/// a fresh load (as after a crash) sees the same members.
#[tokio::test]
async fn failure_set_survives_reload() {
    let dir = tempdir().unwrap();
    let mut collector = new_collector(&dir, 1);

    let catalogue = vec![
        listing(2, ActivityStatus::Active),
        listing(3, ActivityStatus::Active),
    ];
    let fetch = fetch_stub(HashMap::from([
        (2, Behavior::Transient),
        (3, Behavior::Fatal),
    ]));
    collector.collect(&catalogue, fetch).await.unwrap();

    let reloaded = FailureSet::load(&skipped_path(&dir)).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains(PlayerId::new(2)));
    assert!(reloaded.contains(PlayerId::new(3)));

    let contents = std::fs::read_to_string(skipped_path(&dir)).unwrap();
    assert_eq!(contents, "2\n3\n");
}

/// A later sweep recovers what it can and leaves the rest: starting from
/// failure set {2, 3}, 2 now succeeds and 3 keeps timing out, ending with
/// the store holding 2 and the set holding only 3. A final sweep where 3
/// succeeds empties the set and removes the file.
#[tokio::test]
async fn convergence_across_runs() {
    let dir = tempdir().unwrap();
    let path = skipped_path(&dir);
    let catalogue = vec![
        listing(2, ActivityStatus::Active),
        listing(3, ActivityStatus::Active),
    ];

    // Seed the on-disk set as a prior failed run would have left it.
    let mut seed = FailureSet::load(&path).unwrap();
    seed.mark_failed(PlayerId::new(2)).unwrap();
    seed.mark_failed(PlayerId::new(3)).unwrap();

    let db = NbaDatabase::new_in_memory().unwrap();
    let failures = FailureSet::load(&path).unwrap();
    let mut collector = Collector::new(db, failures, CollectorSettings::immediate(3, 1));

    let fetch = fetch_stub(HashMap::from([
        (2, Behavior::Succeed),
        (3, Behavior::Transient),
    ]));
    let summary = collector.retry_pending(&catalogue, fetch).await.unwrap();

    assert_eq!(summary.captured, 1);
    assert_eq!(summary.abandoned, 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "3\n");

    // Final sweep: 3 recovers, the set empties, the file disappears.
    let (db, failures) = collector.into_parts();
    let mut collector = Collector::new(db, failures, CollectorSettings::immediate(3, 1));
    let fetch = fetch_stub(HashMap::from([(3, Behavior::Succeed)]));
    let summary = collector.retry_pending(&catalogue, fetch).await.unwrap();

    assert_eq!(summary.captured, 1);
    assert_eq!(summary.abandoned, 0);
    assert!(!path.exists());

    let (db, failures) = collector.into_parts();
    assert!(failures.is_empty());
    assert!(db.player_exists(PlayerId::new(2)).unwrap());
    assert!(db.player_exists(PlayerId::new(3)).unwrap());
}

/// Identifiers with no catalogue entry still collect, with the activity
/// flag defaulting to Unknown.
#[tokio::test]
async fn uncorrelated_id_defaults_to_unknown() {
    let dir = tempdir().unwrap();
    let path = skipped_path(&dir);

    let mut seed = FailureSet::load(&path).unwrap();
    seed.mark_failed(PlayerId::new(9)).unwrap();

    let db = NbaDatabase::new_in_memory().unwrap();
    let failures = FailureSet::load(&path).unwrap();
    let mut collector = Collector::new(db, failures, CollectorSettings::immediate(3, 1));

    let summary = collector
        .retry_pending(&[], fetch_stub(HashMap::new()))
        .await
        .unwrap();
    assert_eq!(summary.captured, 1);

    let (db, _) = collector.into_parts();
    let players = db.all_players().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].is_active, ActivityStatus::Unknown);
}

/// A second full run fetches nothing: every catalogue entry is already
/// stored, even if the fetch function would now fail hard.
#[tokio::test]
async fn captured_players_are_never_refetched() {
    let dir = tempdir().unwrap();
    let mut collector = new_collector(&dir, 1);

    let catalogue = vec![
        listing(1, ActivityStatus::Active),
        listing(2, ActivityStatus::Active),
    ];
    let summary = collector
        .collect(&catalogue, fetch_stub(HashMap::new()))
        .await
        .unwrap();
    assert_eq!(summary.captured, 2);
    assert_eq!(summary.teams_loaded, 30);

    let fetch = fetch_stub(HashMap::from([
        (1, Behavior::Fatal),
        (2, Behavior::Fatal),
    ]));
    let summary = collector.collect(&catalogue, fetch).await.unwrap();

    assert_eq!(summary.captured, 0);
    assert_eq!(summary.already_present, 2);
    assert_eq!(summary.abandoned, 0);
    // Team load is idempotent too.
    assert_eq!(summary.teams_loaded, 0);

    let (db, _) = collector.into_parts();
    assert_eq!(db.team_count().unwrap(), 30);
}

/// The sweep loop stops at the cap instead of spinning on a source that
/// never recovers: one initial pass plus `max_sweeps` sweeps, each making
/// `max_attempts` tries.
#[tokio::test]
async fn sweep_cap_bounds_total_attempts() {
    let dir = tempdir().unwrap();
    let max_sweeps = 3;
    let mut collector = new_collector(&dir, max_sweeps);

    let calls = AtomicU32::new(0);
    let fetch = |_: PlayerId| {
        calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(Err::<PlayerDetail, _>(FetchError::Transient(
            NbaError::NoData,
        )))
    };

    let catalogue = vec![listing(1, ActivityStatus::Active)];
    let summary = collector.collect(&catalogue, fetch).await.unwrap();

    assert_eq!(summary.abandoned, 1);
    assert_eq!(calls.load(Ordering::SeqCst), (1 + max_sweeps) * 3);
    assert!(skipped_path(&dir).exists());
}
