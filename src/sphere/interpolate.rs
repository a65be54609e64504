//! Intermediate points along a great circle (spherical linear interpolation).
//!
//! For central angle δ between the endpoints:
//!   A = sin((1−f)·δ) / sin δ,  B = sin(f·δ) / sin δ
//!   x = A·cos φ₁·cos λ₁ + B·cos φ₂·cos λ₂
//!   y = A·cos φ₁·sin λ₁ + B·cos φ₂·sin λ₂
//!   z = A·sin φ₁ + B·sin φ₂
//!   φ = atan2(z, √(x² + y²)),  λ = atan2(y, x)

use crate::angle::radians_to_degrees;
use crate::coord::Coord;
use crate::sphere::haversine_angle;

/// The point `fraction` of the way along the great circle from `from` to `to`.
///
/// `fraction` is not clamped; values outside [0, 1] extrapolate along the
/// same circle.
///
/// When the endpoints coincide the weights are 0/0. In that case `from` is
/// returned unchanged. Antipodal endpoints have no unique great circle and
/// the result is not meaningful.
pub fn intermediate_point(from: Coord, to: Coord, fraction: f64) -> Coord {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_between = haversine_angle(lat1, lon1, lat2, lon2);
    let sin_d = d_between.sin();
    if sin_d == 0.0 {
        log::debug!("intermediate_point: {from} and {to} coincide, returning start point");
        return from;
    }

    let a = ((1.0 - fraction) * d_between).sin() / sin_d;
    let b = (fraction * d_between).sin() / sin_d;

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);

    Coord::new(radians_to_degrees(lat), radians_to_degrees(lon))
}
