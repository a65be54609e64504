/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3958.0;

/// Mean Earth radius in kilometres.
///
/// Rounded independently of [`EARTH_RADIUS_MI`]; the two are not related by
/// the exact mile/kilometre factor.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
