//! Unit tests for storage functionality.

use nba_info::storage::*;
use nba_info::{PlayerId, TeamId};

fn create_test_db() -> NbaDatabase {
    NbaDatabase::new_in_memory().unwrap()
}

fn test_player(id: u64, name: &str) -> PlayerRecord {
    PlayerRecord {
        player_id: PlayerId::new(id),
        full_name: name.to_string(),
        jersey_num: Some("23".to_string()),
        team_name: "Los Angeles Lakers".to_string(),
        team_ab: "LAL".to_string(),
        pos: "Forward".to_string(),
        height: "6-9".to_string(),
        weight: "250".to_string(),
        country: Some("USA".to_string()),
        is_active: ActivityStatus::Active,
    }
}

fn test_team(id: u64, nickname: &str) -> TeamRecord {
    TeamRecord {
        team_id: TeamId::new(id),
        team_name: format!("City {nickname}"),
        team_ab: nickname[..3.min(nickname.len())].to_uppercase(),
        team_nickname: nickname.to_string(),
        city: "City".to_string(),
        state: "State".to_string(),
        year_founded: 1970,
    }
}

#[test]
fn database_creation() {
    let _db = create_test_db();
}

#[test]
fn insert_player_then_exists() {
    let mut db = create_test_db();
    assert!(!db.player_exists(PlayerId::new(2544)).unwrap());

    assert!(db.insert_player(&test_player(2544, "LeBron James")).unwrap());
    assert!(db.player_exists(PlayerId::new(2544)).unwrap());
}

#[test]
fn duplicate_player_insert_is_absorbed() {
    let mut db = create_test_db();

    assert!(db.insert_player(&test_player(2544, "LeBron James")).unwrap());

    // Second insert must neither error nor overwrite.
    let mut changed = test_player(2544, "Someone Else");
    changed.team_ab = "BOS".to_string();
    assert!(!db.insert_player(&changed).unwrap());

    let players = db.all_players().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].full_name, "LeBron James");
    assert_eq!(players[0].team_ab, "LAL");
}

#[test]
fn duplicate_team_insert_is_absorbed() {
    let mut db = create_test_db();

    assert!(db.insert_team(&test_team(5, "Mavericks")).unwrap());
    assert!(!db.insert_team(&test_team(5, "Mavericks")).unwrap());

    assert_eq!(db.team_count().unwrap(), 1);
    assert!(db.team_exists(TeamId::new(5)).unwrap());
}

#[test]
fn player_round_trips_with_nullable_fields() {
    let mut db = create_test_db();

    let mut record = test_player(76001, "Kareem Abdul-Jabbar");
    record.jersey_num = None;
    record.country = None;
    record.is_active = ActivityStatus::NotActive;
    db.insert_player(&record).unwrap();

    let players = db.all_players().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].jersey_num, None);
    assert_eq!(players[0].country, None);
    assert_eq!(players[0].is_active, ActivityStatus::NotActive);
}

#[test]
fn players_listed_in_id_order() {
    let mut db = create_test_db();
    db.insert_player(&test_player(300, "C")).unwrap();
    db.insert_player(&test_player(7, "A")).unwrap();
    db.insert_player(&test_player(42, "B")).unwrap();

    let ids: Vec<u64> = db
        .all_players()
        .unwrap()
        .iter()
        .map(|p| p.player_id.as_u64())
        .collect();
    assert_eq!(ids, vec![7, 42, 300]);
}

#[test]
fn teams_listed_by_nickname() {
    let mut db = create_test_db();
    db.insert_team(&test_team(1, "Warriors")).unwrap();
    db.insert_team(&test_team(2, "Celtics")).unwrap();
    db.insert_team(&test_team(3, "Lakers")).unwrap();

    let nicknames: Vec<String> = db
        .all_teams()
        .unwrap()
        .iter()
        .map(|t| t.team_nickname.clone())
        .collect();
    assert_eq!(nicknames, vec!["Celtics", "Lakers", "Warriors"]);
}

#[test]
fn counts_track_inserts() {
    let mut db = create_test_db();
    assert_eq!(db.player_count().unwrap(), 0);
    assert_eq!(db.team_count().unwrap(), 0);

    db.insert_player(&test_player(1, "One")).unwrap();
    db.insert_player(&test_player(2, "Two")).unwrap();
    db.insert_team(&test_team(10, "Hawks")).unwrap();

    assert_eq!(db.player_count().unwrap(), 2);
    assert_eq!(db.team_count().unwrap(), 1);
}
