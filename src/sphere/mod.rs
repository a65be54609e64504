//! Great-circle math on a spherical Earth.

pub mod distance;
pub mod interpolate;
pub mod radius;

use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::HaversineError;

use self::radius::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};

/// Linear units a central angle can be scaled into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Miles,
    Kilometers,
}

impl Unit {
    /// Parse from a unit name or abbreviation.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Some(Self::Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(Self::Kilometers)
            }
            _ => None,
        }
    }

    /// Earth radius expressed in this unit.
    pub fn radius(&self) -> f64 {
        match self {
            Self::Miles => EARTH_RADIUS_MI,
            Self::Kilometers => EARTH_RADIUS_KM,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
        }
    }
}

impl FromStr for Unit {
    type Err = HaversineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HaversineError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Central angle in radians between two coordinates, via the haversine formula.
///
///   a = sin²(Δφ/2) + cos φ₁·cos φ₂·sin²(Δλ/2)
///   c = 2·atan2(√a, √(1−a))
///
/// The atan2 form stays well conditioned near zero and near antipodes.
/// Always in `[0, π]` for finite inputs.
pub fn central_angle(p: Coord, q: Coord) -> f64 {
    let (lat1, lon1) = p.to_radians();
    let (lat2, lon2) = q.to_radians();
    haversine_angle(lat1, lon1, lat2, lon2)
}

/// Same as [`central_angle`] on inputs already in radians.
pub(crate) fn haversine_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let diff_lat = lat2 - lat1;
    let diff_lon = lon2 - lon1;

    let a = (diff_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (diff_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 at antipodes, which would make √(1−a) NaN.
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
