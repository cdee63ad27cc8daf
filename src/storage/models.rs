//! Data models for the storage layer.

use crate::cli::types::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a player was listed as active in the bulk catalogue.
///
/// The detail endpoint does not carry this flag; it is correlated from the
/// catalogue at fetch time and defaults to `Unknown` when no catalogue entry
/// exists for the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Active,
    NotActive,
    Unknown,
}

impl ActivityStatus {
    /// Parse the stored text form; anything unrecognized maps to `Unknown`.
    pub fn from_db(s: &str) -> Self {
        match s {
            "Active" => Self::Active,
            "Not Active" => Self::NotActive,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::NotActive => "Not Active",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// One captured player, as stored in the `Players` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub full_name: String,
    pub jersey_num: Option<String>,
    pub team_name: String,
    pub team_ab: String,
    pub pos: String,
    pub height: String,
    pub weight: String,
    pub country: Option<String>,
    pub is_active: ActivityStatus,
}

/// One team, as stored in the `Teams` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub team_name: String,
    pub team_ab: String,
    pub team_nickname: String,
    pub city: String,
    pub state: String,
    pub year_founded: u16,
}
