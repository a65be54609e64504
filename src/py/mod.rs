use pyo3::prelude::*;

mod sphere;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sphere::distance, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::distance_in, m)?)?;
    m.add_function(wrap_pyfunction!(sphere::intermediate_point, m)?)?;
    m.add("EARTH_RADIUS_MI", crate::EARTH_RADIUS_MI)?;
    m.add("EARTH_RADIUS_KM", crate::EARTH_RADIUS_KM)?;
    Ok(())
}
