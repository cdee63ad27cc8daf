//! Storage layer for collected NBA data.
//!
//! A thin abstraction over SQLite, organized into:
//! - `models`: typed records
//! - `schema`: connection and table management
//! - `queries`: idempotent inserts and read-only queries

pub mod models;
pub mod queries;
pub mod schema;

pub use models::{ActivityStatus, PlayerRecord, TeamRecord};
pub use schema::NbaDatabase;
