//! The per-tick output value.

use ds_core::{Cardinal, GeoPoint};
use ds_route::{PositionInterpolator, RouteModel};

use crate::SimulationState;

/// Immutable view of a playback at one instant, emitted on every tick and on
/// every seek.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSnapshot {
    /// Tick sequence number since `start`.  Seeks do not advance it.
    pub tick:                  u64,
    pub phase:                 crate::Phase,
    pub position:              GeoPoint,
    pub distance_traveled_km:  f64,
    /// Share of the total route duration covered, `[0, 100]`.
    pub progress_percent:      f64,
    pub elapsed_secs:          f64,
    pub segment:               usize,
    pub segment_fraction:      f64,
    /// Initial bearing of the current segment.
    pub bearing_deg:           f64,
    pub heading:               Cardinal,
    /// `distance / elapsed`; `0` before any time has elapsed.
    pub average_speed_kmh:     f64,
}

impl SimulationSnapshot {
    pub(crate) fn capture(route: &RouteModel, state: &SimulationState) -> Self {
        let interp   = PositionInterpolator::new(route);
        let segment  = state.current_segment;
        let fraction = state.segment_fraction().clamp(0.0, 1.0);

        let distance_km = interp.distance_traveled_km(segment, fraction);
        let bearing     = interp.heading_deg(segment);
        let hours       = state.elapsed_secs / 3_600.0;

        Self {
            tick:                 state.ticks,
            phase:                state.phase,
            position:             interp.position_at(segment, fraction),
            distance_traveled_km: distance_km,
            progress_percent:     interp.progress_percent(segment, fraction),
            elapsed_secs:         state.elapsed_secs,
            segment,
            segment_fraction:     fraction,
            bearing_deg:          bearing,
            heading:              Cardinal::from_bearing(bearing),
            average_speed_kmh:    if hours > 0.0 { distance_km / hours } else { 0.0 },
        }
    }
}
