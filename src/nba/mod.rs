//! stats.nba.com client: bulk catalogue, per-player detail, and the static
//! team reference data.

pub mod http;
pub mod teams;
pub mod types;
