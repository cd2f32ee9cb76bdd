//! Rate limiting for state refreshes.
//!
//! Speakers run a small embedded HTTP server, and a full refresh costs up to
//! seven round trips. Whoever schedules refreshes decides how often that may
//! happen by handing a [`RefreshPolicy`] to the device.

use std::{fmt, time::Duration, time::Instant};

/// Decides whether a refresh may go ahead.
pub trait RefreshPolicy: Send + Sync + fmt::Debug {
    /// `forced` refreshes follow an action the caller wants to see reflected
    /// quickly. Returning `true` counts as a refresh having happened at `now`.
    fn should_refresh(&mut self, now: Instant, forced: bool) -> bool;
}

/// Every refresh goes ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl RefreshPolicy for Unthrottled {
    fn should_refresh(&mut self, _now: Instant, _forced: bool) -> bool {
        true
    }
}

/// Enforces a minimum interval between refreshes, with a shorter one for
/// forced refreshes.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    forced_interval: Duration,
    last: Option<Instant>,
}

#[allow(missing_docs)]
impl Throttle {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);
    pub const DEFAULT_FORCED_INTERVAL: Duration = Duration::from_secs(3);

    pub fn new(interval: Duration, forced_interval: Duration) -> Self {
        Self {
            interval,
            forced_interval,
            last: None,
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL, Self::DEFAULT_FORCED_INTERVAL)
    }
}

impl RefreshPolicy for Throttle {
    fn should_refresh(&mut self, now: Instant, forced: bool) -> bool {
        let interval = if forced {
            self.forced_interval
        } else {
            self.interval
        };
        let due = self
            .last
            .map_or(true, |last| now.saturating_duration_since(last) >= interval);
        if due {
            self.last = Some(now);
        }
        due
    }
}
