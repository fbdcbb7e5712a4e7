//! # Coordinate Module
//!
//! The [`Coordinate`] trait is the capability set shared by every coordinate
//! representation in this crate. An implementor supplies the two conversions,
//! [`Coordinate::as_cartesian`] and [`Coordinate::as_spheric`]; equality,
//! Euclidean distance and central angle are provided by the free functions in
//! this module and reached through the trait's default methods.
//!
//! ## Equality
//!
//! The generic equality compares Cartesian projections with a Manhattan
//! threshold of [`EQUALITY_THRESHOLD`]. [`SphericCoordinate`] overrides it with
//! an exact field comparison, so the result of `a.is_equal(&b)` depends on the
//! receiver's representation:
//!
//! ```rust
//! use locus::{CartesianCoordinate, Coordinate, SphericCoordinate};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let s1 = SphericCoordinate::new(0.0, FRAC_PI_2, 1.0).unwrap();
//! let s2 = SphericCoordinate::new(0.0, FRAC_PI_2, 1.0 + 1e-7).unwrap();
//!
//! assert!(!s1.is_equal(&s2)); // exact fields
//! assert!(s1.as_cartesian().is_equal(&s2)); // within tolerance
//! ```

pub mod cartesian;
pub mod spheric;

use crate::constants::{ACOS_DRIFT_EPSILON, EQUALITY_THRESHOLD, LATITUDE_OFFSET};
use log::{trace, warn};

pub use cartesian::CartesianCoordinate;
pub use spheric::SphericCoordinate;

/// A location that can be viewed in both Cartesian and spherical form
///
/// The trait is object safe, so collaborators may hold a `Box<dyn Coordinate>`
/// without caring which representation was used to build it.
pub trait Coordinate {
    /// Cartesian view of this coordinate
    fn as_cartesian(&self) -> CartesianCoordinate;

    /// Spherical view of this coordinate
    fn as_spheric(&self) -> SphericCoordinate;

    /// Tolerance-based equality, see [`is_equal`]
    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        is_equal(self, other)
    }

    /// Euclidean distance, see [`cartesian_distance`]
    fn cartesian_distance(&self, other: &dyn Coordinate) -> f64 {
        cartesian_distance(self, other)
    }

    /// Central angle, see [`central_angle`]
    fn central_angle(&self, other: &dyn Coordinate) -> f64 {
        central_angle(self, other)
    }
}

/// Checks whether two coordinates denote the same point
///
/// Both sides are projected to Cartesian form and compared componentwise.
/// They are equal iff `|Δx| + |Δy| + |Δz| < 1e-5`. The threshold bounds the
/// Manhattan distance, not the Euclidean one, so a pair 6.9e-6 apart along a
/// diagonal is *not* equal while a pair 9.9e-6 apart along an axis is.
pub fn is_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let diff = b.as_cartesian() - a.as_cartesian();
    diff.x().abs() + diff.y().abs() + diff.z().abs() < EQUALITY_THRESHOLD
}

/// Straight-line distance between two coordinates
///
/// Always non-negative; symmetric in its arguments.
pub fn cartesian_distance<A, B>(a: &A, b: &B) -> f64
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    (b.as_cartesian() - a.as_cartesian()).magnitude()
}

/// Central angle between two coordinates
///
/// Both sides are projected to spherical form; latitude is taken as
/// `90 - θ` and longitude as `φ`, and the result is the spherical law of
/// cosines evaluated by [`great_circle_angle`].
///
/// # Known issue
///
/// θ is stored in radians but the latitude offset is the degree literal
/// [`LATITUDE_OFFSET`] (90). The formula therefore does not measure the true
/// angle between the two directions; for two antipodal points on the equator
/// it returns roughly 2.2124 instead of π. The behaviour is kept deliberately
/// so existing callers see stable values. Callers that need the geometric
/// angle can pass `π/2 - θ` to [`great_circle_angle`] themselves.
pub fn central_angle<A, B>(a: &A, b: &B) -> f64
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let this = a.as_spheric();
    let other = b.as_spheric();

    let lat1 = LATITUDE_OFFSET - this.theta();
    let lat2 = LATITUDE_OFFSET - other.theta();

    great_circle_angle(lat1, this.phi(), lat2, other.phi())
}

/// Angle in radians subtended at the centre of a sphere by two surface points
///
/// # Arguments
///
/// * `lat1`, `lon1` - Latitude and longitude of the first point in radians
/// * `lat2`, `lon2` - Latitude and longitude of the second point in radians
///
/// The cosine is clamped into [-1, 1] before `acos`, so rounding never yields
/// NaN. The result lies in [0, π] for finite arguments. A non-finite latitude
/// or longitude has no defined angle: it is logged as a warning and NaN is
/// returned.
///
/// # Examples
///
/// ```rust
/// use locus::great_circle_angle;
/// use std::f64::consts::PI;
///
/// // Two points on the equator, half a turn apart
/// let angle = great_circle_angle(0.0, 0.0, 0.0, PI);
/// assert!((angle - PI).abs() < 1e-12);
/// ```
pub fn great_circle_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let cos_sigma = central_cosine(lat1, lon1, lat2, lon2);
    if cos_sigma.is_nan() {
        warn!("central angle undefined for ({lat1}, {lon1}) and ({lat2}, {lon2})");
        return f64::NAN;
    }

    let clamped = cos_sigma.clamp(-1.0, 1.0);
    if clamped != cos_sigma {
        let excess = (cos_sigma - clamped).abs();
        if excess > ACOS_DRIFT_EPSILON {
            warn!("central angle cosine {cos_sigma} outside [-1, 1] by {excess:e}; clamped");
        } else {
            trace!("clamped central angle cosine {cos_sigma} to {clamped}");
        }
    }

    clamped.acos()
}

// Spherical law of cosines, before clamping
fn central_cosine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lon = (lon2 - lon1).abs();
    lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos()
}
