//! Bounded retry around a single player fetch.
//!
//! `fetch_with_retry` is a pure decision function over attempts: it never
//! touches the database or the failure set, so the retry policy is testable
//! without I/O. Persistence of either outcome is the caller's job.

use super::settings::RetryPolicy;
use crate::cli::types::PlayerId;
use crate::error::NbaError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// A fetch failure, classified for retry purposes.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-layer failure worth retrying after a backoff.
    #[error("transient fetch error: {0}")]
    Transient(#[source] NbaError),

    /// Anything else; retrying will not help.
    #[error("fatal fetch error: {0}")]
    Fatal(#[source] NbaError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts and connection failures are the rate-limiter/network
        // signature; decode and status errors mean the response itself
        // is bad and a retry would see the same thing.
        if err.is_timeout() || err.is_connect() {
            FetchError::Transient(err.into())
        } else {
            FetchError::Fatal(err.into())
        }
    }
}

impl From<NbaError> for FetchError {
    fn from(err: NbaError) -> Self {
        match err {
            NbaError::Http(http) => http.into(),
            other => FetchError::Fatal(other),
        }
    }
}

/// Outcome of a retried fetch.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The record came back; the caller persists it and clears the
    /// identifier from the failure set.
    Success(T),
    /// All attempts failed transiently, or one attempt failed fatally;
    /// the caller records the identifier as failed.
    Exhausted,
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// Attempt `fetch` up to `policy.max_attempts` times.
///
/// Transient errors sleep a uniform random duration from the policy's
/// backoff range before the next attempt (skipped after the final one).
/// A fatal error ends the retry loop immediately.
pub async fn fetch_with_retry<T, F, Fut>(
    id: PlayerId,
    fetch: F,
    policy: &RetryPolicy,
) -> FetchOutcome<T>
where
    F: Fn(PlayerId) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    for attempt in 1..=policy.max_attempts {
        match fetch(id).await {
            Ok(record) => return FetchOutcome::Success(record),

            Err(FetchError::Transient(err)) => {
                eprintln!(
                    "[attempt {}/{}] player {}: {}",
                    attempt, policy.max_attempts, id, err
                );
                if attempt < policy.max_attempts {
                    sleep(backoff_delay(policy)).await;
                }
            }

            Err(FetchError::Fatal(err)) => {
                eprintln!("player {}: {} (not retrying)", id, err);
                return FetchOutcome::Exhausted;
            }
        }
    }

    FetchOutcome::Exhausted
}

fn backoff_delay(policy: &RetryPolicy) -> Duration {
    let min = policy.backoff_min.as_secs_f64();
    let max = policy.backoff_max.as_secs_f64();
    if max <= min {
        return policy.backoff_min;
    }
    // Scoped so the thread-local rng is not held across an await.
    let secs = rand::thread_rng().gen_range(min..=max);
    Duration::from_secs_f64(secs)
}
