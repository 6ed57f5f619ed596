//! The controller-owned simulation state.

use std::fmt;

/// Lifecycle phase of a playback.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle     => "idle",
            Phase::Running  => "running",
            Phase::Paused   => "paused",
            Phase::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a playback is, owned by exactly one
/// [`SimulationController`][crate::SimulationController].
///
/// Progress within a segment is kept in *step units* rather than as a
/// fraction, so that `num_steps` uninterrupted ticks land exactly on the end
/// of a segment.  A seek can leave a fractional step count.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub(crate) phase:           Phase,
    pub(crate) current_segment: usize,
    pub(crate) segment_steps:   f64,
    pub(crate) elapsed_secs:    f64,
    pub(crate) num_steps:       u32,
    /// Ticks delivered since `start`.
    pub(crate) ticks:           u64,
}

impl SimulationState {
    /// The `Idle` state: no route, every counter zero.
    pub fn idle(num_steps: u32) -> Self {
        Self {
            phase:           Phase::Idle,
            current_segment: 0,
            segment_steps:   0.0,
            elapsed_secs:    0.0,
            num_steps,
            ticks:           0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the segment being travelled.  Equals the segment count once
    /// the destination is reached.
    #[inline]
    pub fn current_segment(&self) -> usize {
        self.current_segment
    }

    /// Progress within the current segment, in `[0, 1]`.
    #[inline]
    pub fn segment_fraction(&self) -> f64 {
        self.segment_steps / self.num_steps as f64
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    #[inline]
    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
