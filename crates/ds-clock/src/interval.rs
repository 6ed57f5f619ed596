//! Wall-clock ticks against `std::time::Instant`.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::Clock;

/// A [`Clock`] firing every `interval` of real time.
///
/// The next deadline advances by exactly one interval per delivered tick.  A
/// caller that falls behind receives one tick per call until it catches up;
/// ticks are never batched.  A deadline past the end of `Instant`'s range
/// is never due: the clock stays ticking but delivers nothing.
#[derive(Debug, Default)]
pub struct IntervalClock {
    schedule: Option<Schedule>,
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    /// `None` once the deadline overflows `Instant`.
    next_due: Option<Instant>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time until the next tick is due (`Duration::ZERO` if overdue,
    /// `Duration::MAX` if never), or `None` when stopped.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.schedule.map(|s| match s.next_due {
            Some(due) => due.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        })
    }

    fn consume(&mut self, now: Instant) -> bool {
        let Some(s) = self.schedule.as_mut() else {
            return false;
        };
        match s.next_due {
            Some(due) if now >= due => {
                s.next_due = due.checked_add(s.interval);
                if s.next_due.is_none() {
                    trace!("interval clock deadline overflowed; no further ticks");
                }
                true
            }
            _ => false,
        }
    }
}

impl Clock for IntervalClock {
    fn start_ticking(&mut self, interval: Duration) {
        debug_assert!(self.schedule.is_none(), "start_ticking on a ticking clock");
        trace!(?interval, "interval clock started");
        let next_due = Instant::now().checked_add(interval);
        if next_due.is_none() {
            trace!(?interval, "interval past the end of the clock's range; never due");
        }
        self.schedule = Some(Schedule { interval, next_due });
    }

    fn stop(&mut self) {
        if self.schedule.take().is_some() {
            trace!("interval clock stopped");
        }
    }

    fn is_ticking(&self) -> bool {
        self.schedule.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.schedule.map(|s| s.interval)
    }

    fn poll_tick(&mut self) -> bool {
        self.consume(Instant::now())
    }

    /// Returns `false` without blocking when stopped or when the next tick
    /// is never due.
    fn wait_tick(&mut self) -> bool {
        let Some(Schedule { next_due: Some(due), .. }) = self.schedule else {
            return false;
        };
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        self.consume(Instant::now().max(due))
    }
}
