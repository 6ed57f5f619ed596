//! Unvalidated route input as produced by forms or file import.

use ds_core::GeoPoint;

use crate::{RouteModel, RouteResult};

/// Ordered waypoints plus one duration (seconds) per leg.
///
/// `durations_secs[i]` is the duration of the leg that *ends* at
/// `waypoints[i + 1]`.  Nothing is checked until [`RouteInput::build`] (or
/// [`RouteModel::build`]) is called.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInput {
    pub waypoints:      Vec<GeoPoint>,
    pub durations_secs: Vec<f64>,
}

impl RouteInput {
    pub fn new(waypoints: Vec<GeoPoint>, durations_secs: Vec<f64>) -> Self {
        Self { waypoints, durations_secs }
    }

    /// Start a route at `origin`; add legs with [`RouteInput::leg`].
    pub fn starting_at(origin: GeoPoint) -> Self {
        Self {
            waypoints:      vec![origin],
            durations_secs: Vec::new(),
        }
    }

    /// Append a leg ending at `to` that takes `duration_secs`.
    pub fn leg(mut self, to: GeoPoint, duration_secs: f64) -> Self {
        self.waypoints.push(to);
        self.durations_secs.push(duration_secs);
        self
    }

    /// Validate into an immutable [`RouteModel`].
    pub fn build(&self) -> RouteResult<RouteModel> {
        RouteModel::build(self.waypoints.clone(), self.durations_secs.clone())
    }
}
