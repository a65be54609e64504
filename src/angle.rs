//! Degree/radian conversions.
//!
//! Written out as `d * π / 180` rather than `f64::to_radians` so results
//! match the reference formulas bit for bit.

use std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(d: f64) -> f64 {
    d * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(r: f64) -> f64 {
    r * 180.0 / PI
}
