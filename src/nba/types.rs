//! Models for stats.nba.com responses.
//!
//! The stats API returns every endpoint in the same tabular envelope: a list
//! of named result sets, each with a header row and untyped row data. The
//! helpers here pull typed records out of that envelope by header name, so
//! column order changes on the remote side do not silently shift fields.

use crate::cli::types::PlayerId;
use crate::error::{NbaError, Result};
use crate::storage::models::{ActivityStatus, PlayerRecord};
use serde::Deserialize;
use serde_json::Value;

/// Top-level stats.nba.com response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a stats response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or(NbaError::NoData)
    }
}

impl ResultSet {
    fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| NbaError::MissingColumn {
                result_set: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// String cell; JSON null becomes the empty string (the API uses null
    /// for e.g. the team of a player without a current team).
    fn str_cell(&self, row: &[Value], name: &str) -> Result<String> {
        let cell = row.get(self.column(name)?).unwrap_or(&Value::Null);
        Ok(match cell {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    /// String cell where null stays distinguishable from empty.
    fn opt_str_cell(&self, row: &[Value], name: &str) -> Result<Option<String>> {
        let cell = row.get(self.column(name)?).unwrap_or(&Value::Null);
        Ok(match cell {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
    }

    fn u64_cell(&self, row: &[Value], name: &str) -> Result<u64> {
        let col = self.column(name)?;
        row.get(col)
            .and_then(Value::as_u64)
            .ok_or(NbaError::NoData)
    }
}

/// One entry from the bulk player catalogue (`commonallplayers`).
///
/// The catalogue is the only place the active flag exists; the detail
/// endpoint does not carry it.
#[derive(Debug, Clone, Copy)]
pub struct PlayerListing {
    pub id: PlayerId,
    pub roster_status: ActivityStatus,
}

impl PlayerListing {
    /// Parse the whole `CommonAllPlayers` result set.
    pub fn from_result_set(rs: &ResultSet) -> Result<Vec<Self>> {
        rs.row_set
            .iter()
            .map(|row| {
                let id = PlayerId::new(rs.u64_cell(row, "PERSON_ID")?);
                let roster_status = match rs.str_cell(row, "ROSTERSTATUS")?.as_str() {
                    "1" => ActivityStatus::Active,
                    "0" => ActivityStatus::NotActive,
                    _ => ActivityStatus::Unknown,
                };
                Ok(Self { id, roster_status })
            })
            .collect()
    }
}

/// Detail fields for one player (`commonplayerinfo`), minus the activity
/// flag, which is correlated from the catalogue.
#[derive(Debug, Clone)]
pub struct PlayerDetail {
    pub player_id: PlayerId,
    pub full_name: String,
    pub jersey_num: Option<String>,
    pub team_name: String,
    pub team_ab: String,
    pub pos: String,
    pub height: String,
    pub weight: String,
    pub country: Option<String>,
}

impl PlayerDetail {
    /// Extract the first (only) row of the `CommonPlayerInfo` result set.
    pub fn from_response(resp: &StatsResponse) -> Result<Self> {
        let rs = resp.result_set("CommonPlayerInfo")?;
        let row = rs.row_set.first().ok_or(NbaError::NoData)?;

        Ok(Self {
            player_id: PlayerId::new(rs.u64_cell(row, "PERSON_ID")?),
            full_name: rs.str_cell(row, "DISPLAY_FIRST_LAST")?,
            jersey_num: rs.opt_str_cell(row, "JERSEY")?,
            team_name: rs.str_cell(row, "TEAM_NAME")?,
            team_ab: rs.str_cell(row, "TEAM_ABBREVIATION")?,
            pos: rs.str_cell(row, "POSITION")?,
            height: rs.str_cell(row, "HEIGHT")?,
            weight: rs.str_cell(row, "WEIGHT")?,
            country: rs.opt_str_cell(row, "COUNTRY")?,
        })
    }

    /// Combine with the catalogue's activity flag into a storable record.
    pub fn into_record(self, is_active: ActivityStatus) -> PlayerRecord {
        PlayerRecord {
            player_id: self.player_id,
            full_name: self.full_name,
            jersey_num: self.jersey_num,
            team_name: self.team_name,
            team_ab: self.team_ab,
            pos: self.pos,
            height: self.height,
            weight: self.weight,
            country: self.country,
            is_active,
        }
    }
}
