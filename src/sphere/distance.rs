//! Great-circle distance via the haversine formula.

use crate::coord::Coord;
use crate::sphere::radius::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
use crate::sphere::{central_angle, Unit};

/// A great-circle distance expressed in both supported units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    pub miles: f64,
    pub kilometers: f64,
}

impl Distance {
    /// Scale a central angle (radians) by each Earth radius.
    pub fn from_central_angle(c: f64) -> Self {
        Self {
            miles: c * EARTH_RADIUS_MI,
            kilometers: c * EARTH_RADIUS_KM,
        }
    }

    pub fn in_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Miles => self.miles,
            Unit::Kilometers => self.kilometers,
        }
    }
}

impl From<Distance> for (f64, f64) {
    /// Yields `(miles, kilometers)`.
    fn from(d: Distance) -> Self {
        (d.miles, d.kilometers)
    }
}

/// Shortest distance between `p` and `q` over the surface of the Earth.
pub fn distance(p: Coord, q: Coord) -> Distance {
    Distance::from_central_angle(central_angle(p, q))
}

/// Like [`distance`], in a single unit.
pub fn distance_in(p: Coord, q: Coord, unit: Unit) -> f64 {
    central_angle(p, q) * unit.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const BLOOMINGTON: Coord = Coord::new(38.4247, -86.9624);
    const MADISON: Coord = Coord::new(43.0731, -89.4012);

    #[test]
    fn test_bloomington_to_madison() {
        let d = distance(BLOOMINGTON, MADISON);
        assert_relative_eq!(d.miles, 345.503_642_631, epsilon = 1e-6);
        assert_relative_eq!(d.kilometers, 556.140_401_011, epsilon = 1e-6);
    }

    #[test]
    fn test_london_to_new_york() {
        let d = distance(Coord::new(51.5007, -0.1246), Coord::new(40.6892, -74.0445));
        assert_relative_eq!(d.miles, 3463.383_853, epsilon = 1e-5);
        assert_relative_eq!(d.kilometers, 5574.840_457, epsilon = 1e-5);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (BLOOMINGTON, MADISON),
            (Coord::new(-33.8688, 151.2093), Coord::new(35.6762, 139.6503)),
            (Coord::new(89.9, 0.0), Coord::new(-89.9, 180.0)),
            (Coord::new(0.0, 179.5), Coord::new(0.0, -179.5)),
        ];
        for (p, q) in pairs {
            assert_eq!(distance(p, q), distance(q, p));
        }
    }

    #[test]
    fn test_identity_is_zero() {
        for p in [BLOOMINGTON, Coord::new(0.0, 0.0), Coord::new(-90.0, 45.0)] {
            let d = distance(p, p);
            assert_eq!(d.miles, 0.0);
            assert_eq!(d.kilometers, 0.0);
        }
    }

    #[test]
    fn test_unit_ratio() {
        let d = distance(BLOOMINGTON, MADISON);
        assert_relative_eq!(d.kilometers / d.miles, 6371.0 / 3958.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance(Coord::new(0.0, 0.0), Coord::new(0.0, 180.0));
        assert_relative_eq!(d.miles, PI * 3958.0, epsilon = 1e-9);
        assert_relative_eq!(d.kilometers, PI * 6371.0, epsilon = 1e-9);

        // Rounding pushes the haversine term past 1 here without clamping.
        let d = distance(Coord::new(45.0, 30.0), Coord::new(-45.0, -150.0));
        assert!(d.miles.is_finite());
        assert_relative_eq!(d.miles, PI * 3958.0, epsilon = 1e-3);
    }

    #[test]
    fn test_monotonic_along_meridian() {
        let origin = Coord::new(-90.0, 0.0);
        let mut prev = 0.0;
        for i in 1..=180 {
            let d = distance(origin, Coord::new(-90.0 + i as f64, 0.0));
            assert!(d.kilometers > prev, "not increasing at {i}");
            assert!(d.kilometers <= PI * 6371.0 + 1e-9);
            prev = d.kilometers;
        }
    }

    #[test]
    fn test_distance_in_matches_distance() {
        let d = distance(BLOOMINGTON, MADISON);
        assert_eq!(distance_in(BLOOMINGTON, MADISON, Unit::Miles), d.miles);
        assert_eq!(distance_in(BLOOMINGTON, MADISON, Unit::Kilometers), d.kilometers);
        assert_eq!(d.in_unit(Unit::Miles), d.miles);
        assert_eq!(d.in_unit(Unit::Kilometers), d.kilometers);
    }

    #[test]
    fn test_tuple_order() {
        let (mi, km): (f64, f64) = distance(BLOOMINGTON, MADISON).into();
        assert!(km > mi);
    }

    #[test]
    fn test_nan_propagates() {
        let d = distance(Coord::new(f64::NAN, 0.0), MADISON);
        assert!(d.miles.is_nan());
        assert!(d.kilometers.is_nan());
    }
}
