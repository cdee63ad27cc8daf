//! Error types for the NBA info collector.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Could not determine a local data directory")]
    NoDataDir,

    #[error("stats.nba.com returned no data")]
    NoData,

    #[error("result set {result_set} is missing column {column}")]
    MissingColumn {
        result_set: String,
        column: String,
    },
}
