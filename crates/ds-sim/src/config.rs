//! Playback configuration.

use crate::{SimError, SimResult};

/// When the real-time tick interval is (re)computed.
///
/// The simulated time per tick depends only on the route and `num_steps`,
/// both fixed for a run.  The *wall-clock* interval also depends on
/// [`PlaybackConfig::speed`], which may change while paused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntervalPolicy {
    /// Recompute from the route and the current config on every `resume`.
    #[default]
    RecomputeOnResume,
    /// Keep the interval computed at `start` for the whole run.
    FixedAtStart,
}

/// Top-level playback configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    /// Steps per segment.  Default: 100.
    pub num_steps: u32,

    /// Real-time multiplier.  `2.0` plays back twice as fast; simulated
    /// elapsed time is unaffected.  Default: 1.0.
    pub speed: f64,

    pub interval_policy: IntervalPolicy,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            num_steps:       100,
            speed:           1.0,
            interval_policy: IntervalPolicy::default(),
        }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.num_steps == 0 {
            return Err(SimError::InvalidConfig("num_steps must be at least 1".into()));
        }
        validate_speed(self.speed)
    }
}

pub(crate) fn validate_speed(speed: f64) -> SimResult<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "speed must be a positive finite number, got {speed}"
        )))
    }
}
