//! The validated, immutable route.

use ds_core::GeoPoint;

use crate::{RouteError, RouteInput, RouteResult};

/// Waypoints, per-segment durations, and the cumulative tables derived from
/// them.
///
/// A `RouteModel` can only be obtained through [`RouteModel::build`], so every
/// instance satisfies:
///
/// - `waypoints.len() >= 2`
/// - `durations.len() == waypoints.len() - 1`
/// - every duration is finite and `> 0`
#[derive(Clone, Debug, PartialEq)]
pub struct RouteModel {
    waypoints: Vec<GeoPoint>,
    durations: Vec<f64>,
    /// `cumulative_secs[i]` = sum of `durations[..i]`; length `segments + 1`.
    cumulative_secs: Vec<f64>,
    /// Great-circle length of each segment in metres.
    lengths_m: Vec<f64>,
    /// `cumulative_m[i]` = sum of `lengths_m[..i]`; length `segments + 1`.
    cumulative_m: Vec<f64>,
}

impl RouteModel {
    /// Validate `waypoints` and `durations_secs` and precompute the
    /// cumulative duration and length tables.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooFewWaypoints`] for fewer than 2 waypoints.
    /// - [`RouteError::DurationCountMismatch`] unless there is exactly one
    ///   duration per segment.
    /// - [`RouteError::NonPositiveDuration`] for any duration that is not a
    ///   finite number `> 0`.
    /// - [`RouteError::InvalidWaypoint`] for NaN/infinite coordinates or a
    ///   latitude outside `[-90, 90]`.
    pub fn build(waypoints: Vec<GeoPoint>, durations_secs: Vec<f64>) -> RouteResult<Self> {
        if waypoints.len() < 2 {
            return Err(RouteError::TooFewWaypoints { got: waypoints.len() });
        }
        let segments = waypoints.len() - 1;
        if durations_secs.len() != segments {
            return Err(RouteError::DurationCountMismatch {
                expected: segments,
                got:      durations_secs.len(),
            });
        }
        if let Some((segment, &secs)) = durations_secs
            .iter()
            .enumerate()
            .find(|&(_, &d)| !(d.is_finite() && d > 0.0))
        {
            return Err(RouteError::NonPositiveDuration { segment, secs });
        }
        for (index, p) in waypoints.iter().enumerate() {
            p.validate()
                .map_err(|source| RouteError::InvalidWaypoint { index, source })?;
        }

        let cumulative_secs = prefix_sums(&durations_secs);
        let lengths_m: Vec<f64> = waypoints
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .collect();
        let cumulative_m = prefix_sums(&lengths_m);

        Ok(Self {
            waypoints,
            durations: durations_secs,
            cumulative_secs,
            lengths_m,
            cumulative_m,
        })
    }

    /// Convenience wrapper over [`RouteInput::build`].
    pub fn from_input(input: &RouteInput) -> RouteResult<Self> {
        input.build()
    }

    // ── Shape ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.durations.len()
    }

    #[inline]
    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    #[inline]
    pub fn waypoint(&self, index: usize) -> Option<GeoPoint> {
        self.waypoints.get(index).copied()
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.waypoints[0]
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// `(from, to)` endpoints of segment `i`.
    ///
    /// # Panics
    /// Panics if `i >= segment_count()`.
    #[inline]
    pub fn segment(&self, i: usize) -> (GeoPoint, GeoPoint) {
        (self.waypoints[i], self.waypoints[i + 1])
    }

    // ── Time ───────────────────────────────────────────────────────────────

    /// Duration of segment `i` in seconds.
    #[inline]
    pub fn duration_secs(&self, i: usize) -> f64 {
        self.durations[i]
    }

    #[inline]
    pub fn durations_secs(&self) -> &[f64] {
        &self.durations
    }

    /// Sum of the durations of segments `0..i` (not including `i`).
    ///
    /// Valid for `i` in `0..=segment_count()`; `cumulative_secs(segment_count())`
    /// is the total duration.
    #[inline]
    pub fn cumulative_secs(&self, i: usize) -> f64 {
        self.cumulative_secs[i]
    }

    #[inline]
    pub fn total_duration_secs(&self) -> f64 {
        self.cumulative_secs[self.segment_count()]
    }

    /// Find the segment containing `elapsed_secs` by linear scan.
    ///
    /// Returns `(segment, fraction)` for the first segment `i` with
    /// `cumulative(i) + duration(i) > elapsed_secs`.  The inequality is
    /// strict, so a value exactly on a boundary belongs to the *next*
    /// segment at fraction `0.0`.  Returns `None` when `elapsed_secs` is at or
    /// beyond the total duration.  Negative input is treated as `0`.
    pub fn locate(&self, elapsed_secs: f64) -> Option<(usize, f64)> {
        let target = elapsed_secs.max(0.0);
        let mut accumulated = 0.0;
        for (i, &duration) in self.durations.iter().enumerate() {
            if accumulated + duration > target {
                return Some((i, (target - accumulated) / duration));
            }
            accumulated += duration;
        }
        None
    }

    // ── Distance ───────────────────────────────────────────────────────────

    /// Great-circle length of segment `i` in metres.
    #[inline]
    pub fn segment_length_m(&self, i: usize) -> f64 {
        self.lengths_m[i]
    }

    /// Sum of the lengths of segments `0..i`.  Valid for `i` in
    /// `0..=segment_count()`.
    #[inline]
    pub fn completed_length_m(&self, i: usize) -> f64 {
        self.cumulative_m[i]
    }

    #[inline]
    pub fn total_length_m(&self) -> f64 {
        self.cumulative_m[self.segment_count()]
    }
}

fn prefix_sums(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for v in values {
        acc += v;
        out.push(acc);
    }
    out
}
