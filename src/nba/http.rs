//! HTTP client for stats.nba.com.

use super::types::{PlayerDetail, PlayerListing, StatsResponse};
use crate::cli::types::PlayerId;
use crate::collector::retry::FetchError;
use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Season string for catalogue queries.
pub const CURRENT_SEASON: &str = "2025-26";

/// Per-request timeout. Attempts that hang past this are classified as
/// transient and retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Build a client with the header set stats.nba.com requires; requests
/// without a browser user agent and the stats origin headers are rejected.
pub fn stats_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Pull the full player catalogue (`commonallplayers`), historical players
/// included. This is the one bulk call of a run; its failure is fatal to
/// the run and is not retried here.
pub async fn list_players(client: &Client) -> Result<Vec<PlayerListing>> {
    let url = format!("{STATS_BASE_URL}/commonallplayers");
    let params = [
        ("LeagueID", "00"),
        ("Season", CURRENT_SEASON),
        ("IsOnlyCurrentSeason", "0"),
    ];

    let resp = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    PlayerListing::from_result_set(resp.result_set("CommonAllPlayers")?)
}

/// Fetch one player's detail row (`commonplayerinfo`).
///
/// Errors come back pre-classified so the retry worker can decide between
/// backing off and giving up.
pub async fn fetch_player_detail(client: &Client, id: PlayerId) -> std::result::Result<PlayerDetail, FetchError> {
    let url = format!("{STATS_BASE_URL}/commonplayerinfo");
    let params = [("PlayerID", id.to_string()), ("LeagueID", "00".to_string())];

    let resp = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    PlayerDetail::from_response(&resp).map_err(FetchError::from)
}
