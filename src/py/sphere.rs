//! PyO3 bindings for great-circle distance and interpolation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::coord::Coord;
use crate::sphere::{self, Unit};

/// Great-circle distance between two points given in degrees.
///
/// Returns:
///     Tuple of (miles, kilometers).
#[pyfunction]
#[pyo3(signature = (lat1, lon1, lat2, lon2))]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    sphere::distance::distance(Coord::new(lat1, lon1), Coord::new(lat2, lon2)).into()
}

/// Great-circle distance in a single unit.
///
/// Args:
///     unit: "mi"/"miles" or "km"/"kilometers" (case-insensitive).
///
/// Raises:
///     ValueError: if the unit name is not recognised.
#[pyfunction]
#[pyo3(signature = (lat1, lon1, lat2, lon2, unit="km"))]
pub fn distance_in(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: &str) -> PyResult<f64> {
    let unit: Unit = unit
        .parse()
        .map_err(|e: crate::error::HaversineError| PyValueError::new_err(e.to_string()))?;
    Ok(sphere::distance::distance_in(
        Coord::new(lat1, lon1),
        Coord::new(lat2, lon2),
        unit,
    ))
}

/// Point at `fraction` along the great circle from (lat1, lon1) to (lat2, lon2).
///
/// Coincident endpoints return the start point.
///
/// Returns:
///     Tuple of (lat, lon) in degrees.
#[pyfunction]
#[pyo3(signature = (lat1, lon1, lat2, lon2, fraction))]
pub fn intermediate_point(lat1: f64, lon1: f64, lat2: f64, lon2: f64, fraction: f64) -> (f64, f64) {
    sphere::interpolate::intermediate_point(
        Coord::new(lat1, lon1),
        Coord::new(lat2, lon2),
        fraction,
    )
    .into()
}
