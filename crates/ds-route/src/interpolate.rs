//! Position and distance along a route at a given (segment, fraction).
//!
//! Positions are interpolated linearly in latitude and longitude, segment by
//! segment.  Distances are great-circle distances: every completed segment
//! contributes its full haversine length, and the current segment
//! contributes the haversine distance from its start to the interpolated
//! point.  Because the point itself is planar-interpolated, the partial
//! distance is not exactly `fraction * segment_length`; on long legs the two
//! drift apart.

use ds_core::GeoPoint;

use crate::RouteModel;

/// Read-only view over a [`RouteModel`] answering "where is the vehicle?".
///
/// `segment` values at or past `segment_count()` mean "at the destination";
/// `fraction` is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct PositionInterpolator<'r> {
    route: &'r RouteModel,
}

impl<'r> PositionInterpolator<'r> {
    #[inline]
    pub fn new(route: &'r RouteModel) -> Self {
        Self { route }
    }

    #[inline]
    pub fn route(&self) -> &'r RouteModel {
        self.route
    }

    /// Interpolated coordinate at `fraction` of the way along `segment`.
    pub fn position_at(&self, segment: usize, fraction: f64) -> GeoPoint {
        if segment >= self.route.segment_count() {
            return self.route.destination();
        }
        let (from, to) = self.route.segment(segment);
        let f = clamp_fraction(fraction);
        if f >= 1.0 {
            return to;
        }
        from.lerp(to, f)
    }

    /// Distance travelled from the origin, in metres.
    pub fn distance_traveled_m(&self, segment: usize, fraction: f64) -> f64 {
        if segment >= self.route.segment_count() {
            return self.route.total_length_m();
        }
        let (from, _) = self.route.segment(segment);
        let here = self.position_at(segment, fraction);
        self.route.completed_length_m(segment) + from.distance_m(here)
    }

    #[inline]
    pub fn distance_traveled_km(&self, segment: usize, fraction: f64) -> f64 {
        self.distance_traveled_m(segment, fraction) / 1_000.0
    }

    /// Share of the total route *duration* covered at (segment, fraction), in
    /// `[0, 100]`.
    pub fn progress_percent(&self, segment: usize, fraction: f64) -> f64 {
        let route = self.route;
        if segment >= route.segment_count() {
            return 100.0;
        }
        let covered = route.cumulative_secs(segment)
            + route.duration_secs(segment) * clamp_fraction(fraction);
        (covered / route.total_duration_secs() * 100.0).clamp(0.0, 100.0)
    }

    /// Initial bearing of the segment the vehicle is on.  For the
    /// destination this is the bearing of the final segment.
    pub fn heading_deg(&self, segment: usize) -> f64 {
        let last = self.route.segment_count() - 1;
        let (from, to) = self.route.segment(segment.min(last));
        from.bearing_to(to)
    }
}

#[inline]
fn clamp_fraction(f: f64) -> f64 {
    if f.is_nan() { 0.0 } else { f.clamp(0.0, 1.0) }
}
