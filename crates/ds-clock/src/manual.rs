//! Deterministic clock: every poll while ticking delivers a tick.

use std::time::Duration;

use crate::Clock;

/// A [`Clock`] with no notion of wall time.
///
/// While ticking, each `poll_tick`/`wait_tick` delivers exactly one tick, so
/// "50 polls" means "50 ticks".  Start/stop counters let tests assert the
/// stop-before-start discipline of callers.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    interval:  Option<Duration>,
    /// Number of `start_ticking` calls.
    pub starts: u32,
    /// Number of `stop` calls that actually stopped a ticking schedule.
    pub stops:  u32,
    /// Ticks delivered over the clock's lifetime.
    pub delivered: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn start_ticking(&mut self, interval: Duration) {
        debug_assert!(self.interval.is_none(), "start_ticking on a ticking clock");
        self.interval = Some(interval);
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.interval.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_ticking(&self) -> bool {
        self.interval.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.interval
    }

    fn poll_tick(&mut self) -> bool {
        if self.interval.is_none() {
            return false;
        }
        self.delivered += 1;
        true
    }

    fn wait_tick(&mut self) -> bool {
        self.poll_tick()
    }
}
