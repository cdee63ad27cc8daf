//! Query operations over the captured data.
//!
//! Inserts are idempotent at the SQL level (`INSERT OR IGNORE`), not just via
//! the `exists` pre-check, so a duplicate catalogue entry or a race between
//! check and insert never surfaces as a constraint error. There is no update
//! or delete surface; captured rows are immutable.

use super::models::{ActivityStatus, PlayerRecord, TeamRecord};
use super::schema::NbaDatabase;
use crate::cli::types::{PlayerId, TeamId};
use crate::error::Result;
use rusqlite::{params, Row};

impl NbaDatabase {
    /// Whether a player row exists for this identifier.
    pub fn player_exists(&self, id: PlayerId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Players WHERE player_id = ?",
            params![id.as_u64()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Whether a team row exists for this identifier.
    pub fn team_exists(&self, id: TeamId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Teams WHERE team_id = ?",
            params![id.as_u64()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Insert a player if absent. Returns true when a row was written,
    /// false when the identifier was already captured.
    pub fn insert_player(&mut self, record: &PlayerRecord) -> Result<bool> {
        let rows = self.conn.execute(
            "INSERT OR IGNORE INTO Players (
                player_id, full_name, jersey_num, team_name, team_ab,
                pos, height, weight, country, is_active
            )
            VALUES (?,?,?,?,?,?,?,?,?,?)",
            params![
                record.player_id.as_u64(),
                record.full_name,
                record.jersey_num,
                record.team_name,
                record.team_ab,
                record.pos,
                record.height,
                record.weight,
                record.country,
                record.is_active.to_string(),
            ],
        )?;
        Ok(rows > 0)
    }

    /// Insert a team if absent. Returns true when a row was written.
    pub fn insert_team(&mut self, record: &TeamRecord) -> Result<bool> {
        let rows = self.conn.execute(
            "INSERT OR IGNORE INTO Teams (
                team_id, team_name, team_ab, team_nickname,
                city, state, year_founded
            )
            VALUES (?,?,?,?,?,?,?)",
            params![
                record.team_id.as_u64(),
                record.team_name,
                record.team_ab,
                record.team_nickname,
                record.city,
                record.state,
                record.year_founded,
            ],
        )?;
        Ok(rows > 0)
    }

    /// All captured players, in identifier order.
    pub fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, full_name, jersey_num, team_name, team_ab,
                    pos, height, weight, country, is_active
             FROM Players
             ORDER BY player_id",
        )?;
        let rows = stmt.query_map([], Self::row_to_player)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// All captured teams, ordered by nickname for display.
    pub fn all_teams(&self) -> Result<Vec<TeamRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, team_name, team_ab, team_nickname,
                    city, state, year_founded
             FROM Teams
             ORDER BY team_nickname",
        )?;
        let rows = stmt.query_map([], Self::row_to_team)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Number of captured players.
    pub fn player_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Players", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of captured teams.
    pub fn team_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Teams", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn row_to_player(row: &Row<'_>) -> rusqlite::Result<PlayerRecord> {
        let is_active: String = row.get(9)?;
        Ok(PlayerRecord {
            player_id: PlayerId::new(row.get::<_, u64>(0)?),
            full_name: row.get(1)?,
            jersey_num: row.get(2)?,
            team_name: row.get(3)?,
            team_ab: row.get(4)?,
            pos: row.get(5)?,
            height: row.get(6)?,
            weight: row.get(7)?,
            country: row.get(8)?,
            is_active: ActivityStatus::from_db(&is_active),
        })
    }

    fn row_to_team(row: &Row<'_>) -> rusqlite::Result<TeamRecord> {
        Ok(TeamRecord {
            team_id: TeamId::new(row.get::<_, u64>(0)?),
            team_name: row.get(1)?,
            team_ab: row.get(2)?,
            team_nickname: row.get(3)?,
            city: row.get(4)?,
            state: row.get(5)?,
            year_founded: row.get(6)?,
        })
    }
}
