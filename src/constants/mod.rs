//! Numeric constants shared by the coordinate algorithms

/// Manhattan-distance threshold below which two coordinates compare equal
///
/// The sum `|Δx| + |Δy| + |Δz|` of the Cartesian projections must be
/// strictly less than this value.
pub const EQUALITY_THRESHOLD: f64 = 1e-5;

/// Offset subtracted from the polar angle to obtain a latitude in
/// [`crate::coordinates::central_angle`]
///
/// Note: this is a degree quantity while the polar angle is stored in radians.
/// The mix is kept as-is; see the documentation of `central_angle`.
pub const LATITUDE_OFFSET: f64 = 90.0;

/// Largest correction of an `acos` argument that is considered ordinary
/// floating-point drift
///
/// Arguments further outside [-1, 1] are still clamped, but logged as warnings.
pub const ACOS_DRIFT_EPSILON: f64 = 1e-12;
