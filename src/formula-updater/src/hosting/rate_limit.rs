//! Core API rate limit handling for GitHub.

use octocrab::Octocrab;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Longest time to sleep waiting for a reset.
const MAX_WAIT_SECS: u64 = 3600;

/// Remaining request count below which we wait for the window to reset.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Snapshot of the core API rate limit window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the window resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Seconds to sleep before the next request, if any.
    ///
    /// `now` is a Unix timestamp. Waits are capped at [`MAX_WAIT_SECS`].
    #[must_use]
    pub fn wait_secs(&self, now: u64) -> Option<u64> {
        if self.remaining >= MIN_REMAINING_THRESHOLD || self.reset <= now {
            return None;
        }

        let wait = self.reset - now;
        if wait > MAX_WAIT_SECS {
            warn!(
                wait_secs = wait,
                max_wait = MAX_WAIT_SECS,
                "Rate limit reset too far in future, capping wait time"
            );
        }
        Some(wait.min(MAX_WAIT_SECS))
    }
}

/// Fetches the core rate limit (issues, pulls, ...).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Sleeps until the core window resets when few requests remain.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = check_core_rate_limit(octocrab).await?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if let Some(wait_secs) = info.wait_secs(now) {
        info!(
            remaining = info.remaining,
            wait_secs, "Rate limit low, waiting for reset"
        );
        tokio::time::sleep(Duration::from_secs(wait_secs)).await;
    }
    Ok(())
}
