//! Spherical coordinate representation
//!
//! A [`SphericCoordinate`] holds an azimuth `φ ∈ [-π, π)`, a polar angle
//! `θ ∈ [0, π]` measured from the +z axis, and a radius `r ≥ 0`, all in
//! radians. The ranges are checked once in [`SphericCoordinate::new`]; every
//! value in circulation satisfies them.

use super::cartesian::CartesianCoordinate;
use super::Coordinate;
use crate::{CoordinateError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Spherical coordinate `(φ, θ, r)`
///
/// # Equality
///
/// [`Coordinate::is_equal`] is overridden to compare the raw fields of the
/// other value's spherical projection exactly, without tolerance. This
/// differs from the tolerance-based comparison every other receiver uses and
/// is relied on by callers comparing two spherical values; `==` behaves the
/// same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphericFields")]
pub struct SphericCoordinate {
    phi: f64,
    theta: f64,
    radius: f64,
}

impl SphericCoordinate {
    /// Creates a new spherical coordinate
    ///
    /// # Arguments
    ///
    /// * `phi` - Azimuth in radians, `[-π, π)`
    /// * `theta` - Polar angle in radians, `[0, π]`
    /// * `radius` - Distance from the origin, `>= 0`
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidArgument`] if any argument is out of range
    /// or NaN. The radius is checked first, then azimuth, then polar angle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::SphericCoordinate;
    /// use std::f64::consts::PI;
    ///
    /// assert!(SphericCoordinate::new(-PI, 0.0, 1.0).is_ok());
    /// assert!(SphericCoordinate::new(PI, 0.0, 1.0).is_err());
    /// assert!(SphericCoordinate::new(0.0, 0.0, -1.0).is_err());
    /// ```
    pub fn new(phi: f64, theta: f64, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(CoordinateError::InvalidArgument {
                name: "radius",
                value: radius,
                expected: "r >= 0",
            });
        }

        if !(-PI..PI).contains(&phi) {
            return Err(CoordinateError::InvalidArgument {
                name: "phi",
                value: phi,
                expected: "phi in [-pi, pi)",
            });
        }

        if !(0.0..=PI).contains(&theta) {
            return Err(CoordinateError::InvalidArgument {
                name: "theta",
                value: theta,
                expected: "theta in [0, pi]",
            });
        }

        Ok(Self::from_parts(phi, theta, radius))
    }

    // Callers guarantee the range invariants.
    pub(crate) fn from_parts(phi: f64, theta: f64, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "radius {radius} out of range");
        debug_assert!((-PI..PI).contains(&phi), "phi {phi} out of range");
        debug_assert!((0.0..=PI).contains(&theta), "theta {theta} out of range");
        SphericCoordinate { phi, theta, radius }
    }

    /// Azimuth in radians
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Polar angle in radians
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Coordinate for SphericCoordinate {
    fn as_cartesian(&self) -> CartesianCoordinate {
        let sin_theta = self.theta.sin();
        CartesianCoordinate::new(
            self.radius * sin_theta * self.phi.cos(),
            self.radius * sin_theta * self.phi.sin(),
            self.radius * self.theta.cos(),
        )
    }

    fn as_spheric(&self) -> SphericCoordinate {
        *self
    }

    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        *self == other.as_spheric()
    }

    fn cartesian_distance(&self, other: &dyn Coordinate) -> f64 {
        self.as_cartesian().cartesian_distance(other)
    }
}

impl From<CartesianCoordinate> for SphericCoordinate {
    fn from(cartesian: CartesianCoordinate) -> Self {
        cartesian.as_spheric()
    }
}

#[derive(Deserialize)]
struct SphericFields {
    phi: f64,
    theta: f64,
    radius: f64,
}

impl TryFrom<SphericFields> for SphericCoordinate {
    type Error = CoordinateError;

    fn try_from(fields: SphericFields) -> Result<Self> {
        SphericCoordinate::new(fields.phi, fields.theta, fields.radius)
    }
}
