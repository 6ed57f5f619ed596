//! The `Clock` trait.

use std::time::Duration;

/// A periodic, single-flight tick source.
///
/// # Contract
///
/// - [`start_ticking`][Clock::start_ticking] installs a schedule firing every
///   `interval`.  Callers must [`stop`][Clock::stop] a ticking clock before
///   starting it again; implementations may `debug_assert!` this.
/// - [`stop`][Clock::stop] is synchronous and total.  After it returns,
///   `poll_tick` and `wait_tick` return `false` until the next
///   `start_ticking`.  Stopping an idle clock is a no-op.
/// - Delivery is single-flight: one `poll_tick`/`wait_tick` call yields at
///   most one tick, however late the caller is.
pub trait Clock {
    /// Begin firing every `interval`.
    fn start_ticking(&mut self, interval: Duration);

    /// Cancel the schedule.  No tick is delivered after this returns.
    fn stop(&mut self);

    /// `true` between `start_ticking` and `stop`.
    fn is_ticking(&self) -> bool;

    /// The interval of the current schedule, if ticking.
    fn interval(&self) -> Option<Duration>;

    /// Non-blocking: consume and return `true` if a tick is due now.
    fn poll_tick(&mut self) -> bool;

    /// Blocking: wait until the next tick is due, consume it, and return
    /// `true`.  Returns `false` immediately if the clock is stopped.
    fn wait_tick(&mut self) -> bool;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn start_ticking(&mut self, interval: Duration) {
        (**self).start_ticking(interval)
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn is_ticking(&self) -> bool {
        (**self).is_ticking()
    }

    fn interval(&self) -> Option<Duration> {
        (**self).interval()
    }

    fn poll_tick(&mut self) -> bool {
        (**self).poll_tick()
    }

    fn wait_tick(&mut self) -> bool {
        (**self).wait_tick()
    }
}
