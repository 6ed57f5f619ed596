//! Unit tests for ds-clock.

use std::time::Duration;

use crate::Clock;

#[cfg(test)]
mod manual {
    use super::*;
    use crate::ManualClock;

    #[test]
    fn idle_clock_never_ticks() {
        let mut c = ManualClock::new();
        assert!(!c.is_ticking());
        assert!(!c.poll_tick());
        assert!(!c.wait_tick());
        assert_eq!(c.interval(), None);
    }

    #[test]
    fn every_poll_ticks_while_running() {
        let mut c = ManualClock::new();
        c.start_ticking(Duration::from_millis(36));
        assert_eq!(c.interval(), Some(Duration::from_millis(36)));
        for _ in 0..5 {
            assert!(c.poll_tick());
        }
        assert_eq!(c.delivered, 5);
    }

    #[test]
    fn stop_is_immediate_and_total() {
        let mut c = ManualClock::new();
        c.start_ticking(Duration::from_millis(1));
        assert!(c.poll_tick());
        c.stop();
        assert!(!c.poll_tick());
        assert!(!c.wait_tick());
        assert_eq!(c.delivered, 1);
    }

    #[test]
    fn stop_counts_only_real_stops() {
        let mut c = ManualClock::new();
        c.stop();
        assert_eq!(c.stops, 0);
        c.start_ticking(Duration::from_millis(1));
        c.stop();
        c.stop();
        assert_eq!((c.starts, c.stops), (1, 1));
    }

    #[test]
    fn works_through_mut_ref() {
        fn start_and_poll<C: Clock>(mut clock: C) -> bool {
            clock.start_ticking(Duration::from_millis(5));
            clock.poll_tick()
        }

        let mut c = ManualClock::new();
        assert!(start_and_poll(&mut c));
        assert!(c.is_ticking());
        assert_eq!(c.delivered, 1);
    }
}

#[cfg(test)]
mod interval {
    use std::time::Instant;

    use super::*;
    use crate::IntervalClock;

    #[test]
    fn not_due_before_interval() {
        let mut c = IntervalClock::new();
        c.start_ticking(Duration::from_secs(3600));
        assert!(!c.poll_tick());
        assert!(c.time_until_next().unwrap() > Duration::from_secs(3500));
    }

    #[test]
    fn wait_tick_sleeps_roughly_one_interval() {
        let mut c = IntervalClock::new();
        let t0 = Instant::now();
        c.start_ticking(Duration::from_millis(20));
        assert!(c.wait_tick());
        assert!(t0.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn late_caller_gets_one_tick_per_call() {
        let mut c = IntervalClock::new();
        c.start_ticking(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(30));
        // Several intervals have elapsed, but each poll consumes one.
        assert!(c.poll_tick());
        assert!(c.poll_tick());
        assert_eq!(c.time_until_next(), Some(Duration::ZERO));
    }

    #[test]
    fn interval_past_instant_range_is_never_due() {
        let mut c = IntervalClock::new();
        c.start_ticking(Duration::MAX);
        assert!(c.is_ticking());
        assert!(!c.poll_tick());
        assert!(!c.wait_tick());
        assert_eq!(c.time_until_next(), Some(Duration::MAX));
        c.stop();
        assert!(!c.is_ticking());
    }

    #[test]
    fn stopped_clock_does_not_block() {
        let mut c = IntervalClock::new();
        c.start_ticking(Duration::from_secs(3600));
        c.stop();
        let t0 = Instant::now();
        assert!(!c.wait_tick());
        assert!(!c.poll_tick());
        assert!(t0.elapsed() < Duration::from_secs(1));
        assert_eq!(c.time_until_next(), None);
    }
}
