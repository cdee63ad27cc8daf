//! Tunable knobs for a collection run.

use std::time::Duration;

/// Retry behavior for a single player fetch.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per player, including the first.
    pub max_attempts: u32,
    /// Bounds of the uniform random delay between transient failures.
    pub backoff_min: Duration,
    pub backoff_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_min: Duration::from_secs(2),
            backoff_max: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Policy with no sleeping, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff_min: Duration::ZERO,
            backoff_max: Duration::ZERO,
        }
    }
}

/// Settings for the whole collection run.
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub retry: RetryPolicy,
    /// Pause after each successful fetch, to stay under the source's
    /// rate limiter.
    pub pacing_delay: Duration,
    /// Cap on retry sweeps over the failure set per run. Whatever is
    /// still failing after the last sweep stays on disk for `retry`.
    pub max_sweeps: u32,
    /// Pause between sweeps, so a dead source is not hammered in a
    /// tight loop.
    pub sweep_cooldown: Duration,
    /// Per-player progress output.
    pub verbose: bool,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            pacing_delay: Duration::from_millis(500),
            max_sweeps: 10,
            sweep_cooldown: Duration::from_secs(10),
            verbose: false,
        }
    }
}

impl CollectorSettings {
    /// Settings with all delays zeroed, for tests.
    pub fn immediate(max_attempts: u32, max_sweeps: u32) -> Self {
        Self {
            retry: RetryPolicy::immediate(max_attempts),
            pacing_delay: Duration::ZERO,
            max_sweeps,
            sweep_cooldown: Duration::ZERO,
            verbose: false,
        }
    }
}
