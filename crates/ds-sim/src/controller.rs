//! The `SimulationController` and its state transitions.

use std::time::Duration;

use ds_clock::Clock;
use ds_route::{RouteInput, RouteModel};
use tracing::{debug, info, trace, warn};

use crate::config::validate_speed;
use crate::{
    IntervalPolicy, Phase, PlaybackConfig, SimError, SimResult, SimulationSnapshot,
    SimulationState, SnapshotObserver,
};

/// Plays a route back as a sequence of snapshots.
///
/// `SimulationController<C>` owns the route, the single [`SimulationState`],
/// and the clock that paces ticks.  Every transition that changes the
/// ticking schedule stops the clock first, so no tick can interleave with a
/// transition and at most one schedule is ever live.
///
/// All methods are synchronous: any snapshot a call produces has been handed
/// to the observer before the call returns.
pub struct SimulationController<C: Clock> {
    config: PlaybackConfig,
    clock:  C,
    route:  Option<RouteModel>,
    state:  SimulationState,

    /// Simulated seconds added to `elapsed_secs` per tick.
    tick_interval_secs: f64,

    /// Real-time interval installed at `start`; reused on resume under
    /// [`IntervalPolicy::FixedAtStart`].
    start_interval: Duration,
}

impl<C: Clock> SimulationController<C> {
    pub fn new(config: PlaybackConfig, clock: C) -> Self {
        let state = SimulationState::idle(config.num_steps);
        Self {
            config,
            clock,
            route: None,
            state,
            tick_interval_secs: 0.0,
            start_interval:     Duration::ZERO,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn route(&self) -> Option<&RouteModel> {
        self.route.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Simulated seconds per tick for the current run (`0` when idle).
    #[inline]
    pub fn tick_interval_secs(&self) -> f64 {
        self.tick_interval_secs
    }

    /// The snapshot for the current state without advancing.  `None` when
    /// idle.
    pub fn snapshot(&self) -> Option<SimulationSnapshot> {
        self.route
            .as_ref()
            .map(|route| SimulationSnapshot::capture(route, &self.state))
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Change the real-time multiplier.
    ///
    /// Takes effect at the next `start`, or at the next `resume` under
    /// [`IntervalPolicy::RecomputeOnResume`].  A running schedule is never
    /// altered.
    ///
    /// # Errors
    ///
    /// [`SimError::IntervalOutOfRange`] if a route is loaded, the policy
    /// recomputes on resume, and the resulting interval cannot be scheduled.
    pub fn set_speed(&mut self, speed: f64) -> SimResult<()> {
        validate_speed(speed)?;
        if self.route.is_some() && self.config.interval_policy == IntervalPolicy::RecomputeOnResume {
            wall_interval(self.tick_interval_secs, speed)?;
        }
        debug!(speed, "playback speed changed");
        self.config.speed = speed;
        Ok(())
    }

    /// Change the steps per segment used by the next `start`.
    pub fn set_num_steps(&mut self, num_steps: u32) -> SimResult<()> {
        if num_steps == 0 {
            return Err(SimError::InvalidConfig("num_steps must be at least 1".into()));
        }
        self.config.num_steps = num_steps;
        Ok(())
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Validate `input` and begin playback from the origin.
    ///
    /// # Errors
    ///
    /// - [`SimError::AlreadyRunning`] if the phase is `Running`.
    /// - [`SimError::InvalidRoute`] if the route fails validation.
    /// - [`SimError::InvalidConfig`] for a bad [`PlaybackConfig`].
    /// - [`SimError::IntervalOutOfRange`] if the real-time tick interval is
    ///   too long to schedule.
    ///
    /// On error nothing is changed.
    pub fn start(&mut self, input: &RouteInput) -> SimResult<()> {
        if self.state.phase == Phase::Running {
            warn!("start rejected: already running");
            return Err(SimError::AlreadyRunning);
        }
        let route = RouteModel::from_input(input)?;
        self.start_route(route)
    }

    /// Like [`start`][Self::start] for an already-validated route.
    pub fn start_route(&mut self, route: RouteModel) -> SimResult<()> {
        if self.state.phase == Phase::Running {
            warn!("start rejected: already running");
            return Err(SimError::AlreadyRunning);
        }
        self.config.validate()?;

        let num_steps = self.config.num_steps;
        let tick_secs = route.total_duration_secs()
            / (num_steps as f64 * route.segment_count() as f64);
        let interval = wall_interval(tick_secs, self.config.speed).inspect_err(|_| {
            warn!(tick_secs, speed = self.config.speed, "start rejected: interval out of range");
        })?;

        self.clock.stop();
        self.state = SimulationState::idle(num_steps);
        self.tick_interval_secs = tick_secs;
        self.start_interval = interval;

        info!(
            segments       = route.segment_count(),
            total_secs     = route.total_duration_secs(),
            total_km       = route.total_length_m() / 1_000.0,
            num_steps,
            tick_secs,
            "playback started"
        );
        self.route = Some(route);
        self.state.phase = Phase::Running;
        self.clock.start_ticking(self.start_interval);
        Ok(())
    }

    /// Advance one step and emit a snapshot.
    ///
    /// Does nothing unless the phase is `Running`, so a tick delivered late
    /// (after a pause, a seek, or the end of the route) is harmless.
    pub fn tick<O: SnapshotObserver>(&mut self, observer: &mut O) {
        if self.state.phase != Phase::Running {
            return;
        }
        let Some(route) = self.route.as_ref() else {
            return;
        };
        let segments = route.segment_count();

        if self.state.current_segment >= segments {
            self.clock.stop();
            self.state.phase = Phase::Finished;
            debug!("tick at destination: finished");
            observer.on_finished(&SimulationSnapshot::capture(route, &self.state));
            return;
        }

        let num_steps = self.state.num_steps as f64;
        let state = &mut self.state;
        state.segment_steps = (state.segment_steps + 1.0).min(num_steps);
        state.elapsed_secs += self.tick_interval_secs;
        state.ticks += 1;

        let snapshot = SimulationSnapshot::capture(route, state);
        trace!(
            tick     = snapshot.tick,
            segment  = snapshot.segment,
            progress = snapshot.progress_percent,
            "tick"
        );
        observer.on_snapshot(&snapshot);

        if state.segment_steps >= num_steps {
            state.current_segment += 1;
            state.segment_steps = 0.0;

            if state.current_segment == segments {
                self.clock.stop();
                state.phase = Phase::Finished;
                let last = SimulationSnapshot::capture(route, state);
                info!(
                    elapsed_secs = last.elapsed_secs,
                    distance_km  = last.distance_traveled_km,
                    "playback finished"
                );
                observer.on_finished(&last);
            }
        }
    }

    /// Stop ticking, keeping all progress.  No-op unless `Running`.
    pub fn pause(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }
        self.clock.stop();
        self.state.phase = Phase::Paused;
        debug!(
            segment  = self.state.current_segment,
            fraction = self.state.segment_fraction(),
            "paused"
        );
    }

    /// Continue from exactly where playback paused.  No-op unless `Paused`.
    pub fn resume(&mut self) {
        if self.state.phase != Phase::Paused {
            return;
        }
        let Some(route) = self.route.as_ref() else {
            return;
        };

        let interval = match self.config.interval_policy {
            IntervalPolicy::FixedAtStart => self.start_interval,
            IntervalPolicy::RecomputeOnResume => {
                self.tick_interval_secs = route.total_duration_secs()
                    / (self.state.num_steps as f64 * route.segment_count() as f64);
                // `set_speed` already rejected speeds that overflow here.
                wall_interval(self.tick_interval_secs, self.config.speed)
                    .unwrap_or(self.start_interval)
            }
        };

        self.clock.stop();
        self.state.phase = Phase::Running;
        self.clock.start_ticking(interval);
        debug!(?interval, segment = self.state.current_segment, "resumed");
    }

    /// Stop unconditionally and return to `Idle`, dropping the route.
    pub fn reset(&mut self) {
        self.clock.stop();
        self.route = None;
        self.state = SimulationState::idle(self.config.num_steps);
        self.tick_interval_secs = 0.0;
        self.start_interval = Duration::ZERO;
        info!("playback reset");
    }

    /// Jump to `percent` of the total route duration, pause, and emit a
    /// snapshot.
    ///
    /// `percent` is clamped to `[0, 100]` (NaN counts as 0).  The target
    /// segment is the first whose end lies strictly after the target time,
    /// so a target exactly on a waypoint lands at fraction 0 of the
    /// following segment.  A target at the very end places the vehicle at
    /// the destination.  Does nothing while idle.
    pub fn seek_to<O: SnapshotObserver>(&mut self, percent: f64, observer: &mut O) {
        let Some(route) = self.route.as_ref() else {
            return;
        };
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        let target = percent / 100.0 * route.total_duration_secs();

        self.clock.stop();

        let state = &mut self.state;
        match route.locate(target) {
            Some((segment, fraction)) => {
                state.current_segment = segment;
                state.segment_steps = fraction * state.num_steps as f64;
            }
            None => {
                state.current_segment = route.segment_count();
                state.segment_steps = 0.0;
            }
        }
        state.elapsed_secs = target;
        state.phase = Phase::Paused;

        let snapshot = SimulationSnapshot::capture(route, state);
        debug!(percent, segment = snapshot.segment, fraction = snapshot.segment_fraction, "seek");
        observer.on_snapshot(&snapshot);
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Block on the clock and deliver ticks until playback stops running
    /// (finished, or the clock was stopped).  Returns the ticks delivered.
    pub fn run<O: SnapshotObserver>(&mut self, observer: &mut O) -> u64 {
        let mut delivered = 0;
        while self.state.phase == Phase::Running && self.clock.wait_tick() {
            self.tick(observer);
            delivered += 1;
        }
        delivered
    }

    /// Deliver at most `n` ticks, blocking on the clock for each.
    pub fn run_ticks<O: SnapshotObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut delivered = 0;
        while delivered < n && self.state.phase == Phase::Running && self.clock.wait_tick() {
            self.tick(observer);
            delivered += 1;
        }
        delivered
    }

    /// Deliver one tick if the clock has one due; never blocks.
    pub fn poll<O: SnapshotObserver>(&mut self, observer: &mut O) -> bool {
        if self.state.phase != Phase::Running || !self.clock.poll_tick() {
            return false;
        }
        self.tick(observer);
        true
    }
}

/// Real time between ticks for `tick_secs` of simulated time at `speed`.
fn wall_interval(tick_secs: f64, speed: f64) -> SimResult<Duration> {
    let secs = tick_secs / speed;
    Duration::try_from_secs_f64(secs).map_err(|_| SimError::IntervalOutOfRange { secs })
}
