//! `ds-clock` — tick sources that drive route playback.
//!
//! The playback controller never registers callbacks with a timer.  Instead
//! it owns a [`Clock`] and *pulls* ticks from it, so that stopping the clock
//! is a plain synchronous state change: once [`Clock::stop`] returns, no call
//! to [`Clock::poll_tick`] or [`Clock::wait_tick`] yields a tick until the
//! clock is started again.
//!
//! | Type              | Use                                                   |
//! |-------------------|-------------------------------------------------------|
//! | [`ManualClock`]   | Tests and batch runs: every poll while ticking is due |
//! | [`IntervalClock`] | Real-time playback against `std::time::Instant`       |

pub mod clock;
pub mod interval;
pub mod manual;

#[cfg(test)]
mod tests;

pub use clock::Clock;
pub use interval::IntervalClock;
pub use manual::ManualClock;
