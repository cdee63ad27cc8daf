//! Read-only listings of captured data, for browsing front ends.

use crate::error::Result;
use crate::storage::{ActivityStatus, NbaDatabase};
use std::path::PathBuf;

/// Print captured players, optionally restricted to active ones.
pub async fn handle_players(db: Option<PathBuf>, active: bool, as_json: bool) -> Result<()> {
    let db_path = super::resolve_db_path(&db)?;
    let db = NbaDatabase::open_at(&db_path)?;

    let mut players = db.all_players()?;
    if active {
        players.retain(|p| p.is_active == ActivityStatus::Active);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    for p in &players {
        let jersey = p.jersey_num.as_deref().unwrap_or("-");
        println!(
            "{:>8}  {:<28} #{:<3} {:<4} {:<16} {:>5} {:>4}  {}",
            p.player_id, p.full_name, jersey, p.team_ab, p.pos, p.height, p.weight, p.is_active
        );
    }
    println!("{} players", players.len());
    Ok(())
}

/// Print captured teams, ordered by nickname.
pub async fn handle_teams(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db_path = super::resolve_db_path(&db)?;
    let db = NbaDatabase::open_at(&db_path)?;

    let teams = db.all_teams()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    for t in &teams {
        println!(
            "{:>12}  {:<4} {:<24} {:<16} {:<20} {}",
            t.team_id, t.team_ab, t.team_name, t.city, t.state, t.year_founded
        );
    }
    println!("{} teams", teams.len());
    Ok(())
}
