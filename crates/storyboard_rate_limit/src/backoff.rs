//! Exponential backoff with jitter for throttled requests.
//!
//! The delay before retry `n` (1-indexed) is `2^n * base_delay_ms` plus a
//! uniformly sampled jitter in `[0, max_jitter_ms)`. With the defaults that is
//! 6 s, 12 s, 24 s and 48 s (each plus up to one second) across the four
//! retries allowed by a five-attempt budget.

use crate::is_rate_limited;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use storyboard_error::{StoryboardError, StoryboardResult};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, info, warn};

/// Backoff parameters for throttled requests.
///
/// Loaded from the `[retry]` section of `storyboard.toml`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storyboard_rate_limit::BackoffPolicy;
///
/// let policy = BackoffPolicy::default();
/// assert_eq!(policy.max_attempts, 5);
/// assert_eq!(policy.delay_for(1, 0), Duration::from_millis(6000));
/// assert_eq!(policy.delay_for(4, 999), Duration::from_millis(48_999));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackoffPolicy {
    /// Total attempts allowed, including the first
    pub max_attempts: u32,
    /// Base delay multiplied by `2^attempt`
    pub base_delay_ms: u64,
    /// Exclusive upper bound of the uniform jitter
    pub max_jitter_ms: u64,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 3000,
            max_jitter_ms: 1000,
        }
    }
}

impl BackoffPolicy {
    /// Deterministic delay for a retry, given the jitter already sampled.
    pub fn delay_for(&self, attempt: u32, jitter_ms: u64) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        let millis = factor
            .saturating_mul(self.base_delay_ms)
            .saturating_add(jitter_ms);
        Duration::from_millis(millis)
    }

    /// Delay for a retry with freshly sampled jitter.
    pub fn sample_delay(&self, attempt: u32) -> Duration {
        let jitter_ms = if self.max_jitter_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..self.max_jitter_ms)
        };
        self.delay_for(attempt, jitter_ms)
    }

    /// Delays between consecutive attempts: one fewer than `max_attempts`.
    ///
    /// Jitter is sampled lazily, when the retry loop asks for the next delay.
    pub fn schedule(self) -> impl Iterator<Item = Duration> {
        (1..self.max_attempts.max(1)).map(move |attempt| {
            let delay = self.sample_delay(attempt);
            info!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                "Rate limit hit, backing off before retrying"
            );
            delay
        })
    }

    /// Run `operation` until it succeeds, fails permanently, or the attempt
    /// budget is spent on throttling errors.
    ///
    /// The operation receives the 1-indexed attempt number. Only errors
    /// recognised by [`is_rate_limited`] are retried.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, RetryFailure>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = StoryboardResult<T>>,
    {
        let mut attempts = 0u32;

        let result = Retry::spawn(self.schedule(), || {
            attempts += 1;
            let attempt = attempts;
            let fut = operation(attempt);
            async move {
                match fut.await {
                    Ok(value) => Ok(value),
                    Err(err) if is_rate_limited(&err) => {
                        warn!(attempt, error = %err, "Throttled request, will retry");
                        Err(RetryError::Transient {
                            err,
                            retry_after: None,
                        })
                    }
                    Err(err) => {
                        warn!(attempt, error = %err, "Permanent error, failing immediately");
                        Err(RetryError::Permanent(err))
                    }
                }
            }
        })
        .await;

        result.map_err(|error| {
            if is_rate_limited(&error) {
                debug!(attempts, "Attempt budget exhausted");
                RetryFailure::Exhausted { attempts, error }
            } else {
                RetryFailure::Permanent { attempts, error }
            }
        })
    }
}

/// Why [`BackoffPolicy::execute`] gave up.
#[derive(Debug)]
pub enum RetryFailure {
    /// Every allowed attempt was throttled
    Exhausted {
        /// Attempts made, including the first
        attempts: u32,
        /// The last throttling error
        error: StoryboardError,
    },
    /// A non-throttling error ended the loop
    Permanent {
        /// Attempts made, including the failing one
        attempts: u32,
        /// The error that ended the loop
        error: StoryboardError,
    },
}
