//! Database schema and connection management.

use crate::error::{NbaError, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection manager for the collected player and team data.
///
/// Holds the only handle to the database; the collector borrows it for the
/// lifetime of a run rather than reopening connections per call.
pub struct NbaDatabase {
    pub(crate) conn: Connection,
}

impl NbaDatabase {
    /// Open the database at the default cache location, creating the schema
    /// if it does not exist yet.
    pub fn new() -> Result<Self> {
        Self::open_at(&Self::default_path()?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default location of the database file.
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or(NbaError::NoDataDir)?;
        Ok(cache_dir.join("nba-info").join("nba_info.db"))
    }

    /// Create both tables. Records are immutable once captured, so the
    /// primary keys double as the idempotency guard for inserts.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS Players (
                player_id INTEGER PRIMARY KEY,
                full_name TEXT NOT NULL,
                jersey_num TEXT,
                team_name TEXT NOT NULL,
                team_ab TEXT NOT NULL,
                pos TEXT NOT NULL,
                height TEXT NOT NULL,
                weight TEXT NOT NULL,
                country TEXT,
                is_active TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS Teams (
                team_id INTEGER PRIMARY KEY,
                team_name TEXT NOT NULL,
                team_ab TEXT NOT NULL,
                team_nickname TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                year_founded INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
