use std::fmt;

use crate::angle::degrees_to_radians;
use crate::sphere::distance::{self, Distance};
use crate::sphere::interpolate;

/// A geographic coordinate in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but neither
/// is checked: out-of-range values flow through the trigonometry and wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// (lat, lon) in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (degrees_to_radians(self.lat), degrees_to_radians(self.lon))
    }

    /// Great-circle distance to `other`.
    pub fn distance_to(&self, other: Coord) -> Distance {
        distance::distance(*self, other)
    }

    /// The point `fraction` of the way along the great circle from `self` to `to`.
    ///
    /// See [`interpolate::intermediate_point`] for the coincident-point policy.
    pub fn intermediate_point_to(&self, to: Coord, fraction: f64) -> Coord {
        interpolate::intermediate_point(*self, to, fraction)
    }
}

impl From<(f64, f64)> for Coord {
    /// Takes `(lat, lon)`.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coord> for (f64, f64) {
    fn from(c: Coord) -> Self {
        (c.lat, c.lon)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
