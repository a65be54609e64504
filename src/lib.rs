//! Great-circle distance and intermediate points on a spherical Earth.
//!
//! ```
//! use haversine::{distance, intermediate_point, Coord};
//!
//! let bloomington = Coord::new(38.4247, -86.9624);
//! let madison = Coord::new(43.0731, -89.4012);
//!
//! let d = distance(bloomington, madison);
//! assert!((d.miles - 345.5).abs() < 0.1);
//! assert!((d.kilometers - 556.1).abs() < 0.1);
//!
//! let mid = intermediate_point(Coord::new(0.0, 0.0), Coord::new(0.0, 90.0), 0.5);
//! assert!((mid.lon - 45.0).abs() < 1e-9);
//! ```

pub mod angle;
pub mod coord;
pub mod error;
pub mod sphere;
#[cfg(feature = "python")]
mod py;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use coord::Coord;
pub use error::HaversineError;
pub use sphere::distance::{distance, distance_in, Distance};
pub use sphere::interpolate::intermediate_point;
pub use sphere::radius::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use sphere::{central_angle, Unit};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn haversine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
