//! Exponential backoff schedule for the retrying invoker.

use std::time::Duration;

use crate::config::RetryConfig;

/// Growth factor applied to the delay after each failed attempt.
pub const BACKOFF_MULTIPLIER: u32 = 2;

/// How many attempts to make and how long to wait between them.
///
/// The delay after attempt `i` (0-indexed) is `base_delay * 2^i`. No jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay that follows the failed attempt with the given 0-based index.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = BACKOFF_MULTIPLIER.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Total time spent waiting when every attempt fails.
    ///
    /// Equals `base_delay * (2^max_attempts - 1)`; the delay after the last
    /// attempt is included.
    pub fn minimum_total_delay(&self) -> Duration {
        (0..self.max_attempts)
            .map(|attempt| self.delay_for_attempt(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.base_delay())
    }
}
