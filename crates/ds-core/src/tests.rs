//! Unit tests for ds-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoError, GeoPoint, bearing_degrees, distance_m};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.5223, 77.3966);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 1° of arc on a 6371 km sphere = 111 194.9 m
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.93).abs() < 1.0, "got {d}");
    }

    #[test]
    fn half_degree_along_equator() {
        let d = distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.5));
        assert!((d - 55_597.46).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_nan() {
        let d = distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * crate::EARTH_RADIUS_M;
        assert!((d - half_circumference).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(51.5074, -0.1278);
        let b = GeoPoint::new(48.8566, 2.3522);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-6);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let o = GeoPoint::new(0.0, 0.0);
        assert!((bearing_degrees(o, GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_degrees(o, GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_degrees(o, GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_degrees(o, GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_of_coincident_points_is_zero() {
        let p = GeoPoint::new(10.0, 10.0);
        assert_eq!(bearing_degrees(p, p), 0.0);
    }

    #[test]
    fn lerp_is_planar() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(1.0, 2.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn try_new_rejects_bad_components() {
        assert!(matches!(GeoPoint::try_new(f64::NAN, 0.0), Err(GeoError::NonFiniteLatitude(_))));
        assert!(matches!(GeoPoint::try_new(0.0, f64::INFINITY), Err(GeoError::NonFiniteLongitude(_))));
        assert!(matches!(GeoPoint::try_new(91.0, 0.0), Err(GeoError::LatitudeOutOfRange(_))));
        assert!(GeoPoint::try_new(-90.0, 540.0).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod compass {
    use crate::Cardinal;

    #[test]
    fn exact_points() {
        for (i, c) in Cardinal::ALL.iter().enumerate() {
            assert_eq!(Cardinal::from_bearing(i as f64 * 45.0), *c);
        }
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(Cardinal::from_bearing(22.4), Cardinal::N);
        assert_eq!(Cardinal::from_bearing(22.6), Cardinal::NE);
        assert_eq!(Cardinal::from_bearing(200.0), Cardinal::S);
        assert_eq!(Cardinal::from_bearing(350.0), Cardinal::N); // wraps modulo 8
    }

    #[test]
    fn accepts_out_of_range_angles() {
        assert_eq!(Cardinal::from_bearing(-90.0), Cardinal::W);
        assert_eq!(Cardinal::from_bearing(450.0), Cardinal::E);
    }

    #[test]
    fn display() {
        assert_eq!(Cardinal::SW.to_string(), "SW");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{GeoPoint, bearing_degrees, distance_m};

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-89.0f64..89.0, -180.0f64..180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
    }

    proptest! {
        #[test]
        fn bearing_in_range(a in point(), b in point()) {
            let brg = bearing_degrees(a, b);
            prop_assert!((0.0..360.0).contains(&brg), "bearing {brg}");
        }

        #[test]
        fn distance_bounded_by_half_circumference(a in point(), b in point()) {
            let d = distance_m(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * crate::EARTH_RADIUS_M + 1e-6);
        }

        #[test]
        fn triangle_inequality(a in point(), b in point(), c in point()) {
            prop_assert!(distance_m(a, c) <= distance_m(a, b) + distance_m(b, c) + 1e-6);
        }
    }
}
