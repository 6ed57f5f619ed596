//! Geographic coordinate type and great-circle utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude in decimal degrees.  Route legs
//! can span continents, so single precision is not enough for the distance
//! accumulation the playback engine performs every tick.

use std::fmt;

use crate::{GeoError, GeoResult};

/// Mean Earth radius used by every distance calculation, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate (a route waypoint).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a point, rejecting NaN/infinite components and latitudes
    /// outside `[-90, 90]`.  Longitudes are not range-checked; the haversine
    /// and bearing formulas are periodic in longitude.
    pub fn try_new(lat: f64, lng: f64) -> GeoResult<Self> {
        let p = Self { lat, lng };
        p.validate()?;
        Ok(p)
    }

    /// Check the invariants enforced by [`GeoPoint::try_new`].
    pub fn validate(&self) -> GeoResult<()> {
        if !self.lat.is_finite() {
            return Err(GeoError::NonFiniteLatitude(self.lat));
        }
        if !self.lng.is_finite() {
            return Err(GeoError::NonFiniteLongitude(self.lng));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        Ok(())
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }

    /// Initial bearing from `self` towards `other`, in degrees `[0, 360)`
    /// clockwise from true north.
    ///
    /// Returns `0.0` when both points coincide.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

        normalize_degrees(y.atan2(x).to_degrees())
    }

    /// Planar interpolation in latitude and longitude independently.
    ///
    /// This is not a point on the great circle between the two ends; for
    /// short legs the difference is negligible.
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + fraction * (other.lat - self.lat),
            lng: self.lng + fraction * (other.lng - self.lng),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Great-circle distance between `a` and `b` in metres.
#[inline]
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_m(b)
}

/// Initial bearing from `a` to `b` in degrees `[0, 360)`.
#[inline]
pub fn bearing_degrees(a: GeoPoint, b: GeoPoint) -> f64 {
    a.bearing_to(b)
}

/// Fold any angle into `[0, 360)`.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if d >= 360.0 { 0.0 } else { d }
}
