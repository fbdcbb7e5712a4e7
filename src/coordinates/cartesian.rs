//! # Cartesian Coordinate Module
//!
//! This module provides the Cartesian representation of a location: three
//! unrestricted real components along right-handed x, y and z axes.
//!
//! ## Conversion to spherical form
//!
//! [`CartesianCoordinate::as_spheric`] derives radius, polar angle and azimuth:
//! - `r = sqrt(x² + y² + z²)`, computed with `hypot` so large components
//!   do not overflow
//! - `θ = acos(z / r)`, with `z / r` clamped into [-1, 1]
//! - `φ = atan2(y, x)`, normalised into [-π, π)
//!
//! The origin has no direction, and neither does a point with a NaN or
//! infinite component. `as_spheric` maps both to `(φ, θ, r) = (0, 0, 0)`, so
//! its result always satisfies the spherical range invariants;
//! [`CartesianCoordinate::try_as_spheric`] reports them as
//! [`CoordinateError::DegenerateCoordinate`] instead.
//!
//! ## Examples
//!
//! ```rust
//! use locus::{CartesianCoordinate, Coordinate};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let x_axis = CartesianCoordinate::new(1.0, 0.0, 0.0);
//! let spheric = x_axis.as_spheric();
//!
//! assert_eq!(spheric.phi(), 0.0);
//! assert_eq!(spheric.theta(), FRAC_PI_2);
//! assert_eq!(spheric.radius(), 1.0);
//! ```

use super::spheric::SphericCoordinate;
use super::Coordinate;
use crate::{CoordinateError, Result};
use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Three-dimensional Cartesian coordinate
///
/// An immutable value: components are fixed at construction and exposed
/// through accessors only.
///
/// # Equality
///
/// `==` follows the tolerance-based [`Coordinate::is_equal`], so two values
/// whose components differ by less than `1e-5` in total compare equal. Use the
/// accessors for bit-exact comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianCoordinate {
    /// Creates a new Cartesian coordinate
    ///
    /// # Arguments
    ///
    /// * `x` - X-component
    /// * `y` - Y-component
    /// * `z` - Z-component
    ///
    /// Any real value is accepted. Non-finite components are stored as given;
    /// they propagate into distances, and spherical conversion treats them as
    /// degenerate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, -2.0, 3.5);
    /// assert_eq!(coord.x(), 1.0);
    /// assert_eq!(coord.y(), -2.0);
    /// assert_eq!(coord.z(), 3.5);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianCoordinate { x, y, z }
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// Returns the Euclidean distance from the origin to this point. The sum
    /// of squares is never formed, so the result is finite whenever the
    /// length itself is representable, even for components above
    /// `sqrt(f64::MAX)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Converts to spherical form, rejecting points without a direction
    ///
    /// Behaves like [`Coordinate::as_spheric`] except that the origin (and any
    /// point with a NaN or infinite component) yields
    /// [`CoordinateError::DegenerateCoordinate`] instead of the `(0, 0, 0)`
    /// convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::{CartesianCoordinate, CoordinateError};
    ///
    /// let origin = CartesianCoordinate::new(0.0, 0.0, 0.0);
    /// assert!(matches!(
    ///     origin.try_as_spheric(),
    ///     Err(CoordinateError::DegenerateCoordinate { .. })
    /// ));
    /// ```
    pub fn try_as_spheric(&self) -> Result<SphericCoordinate> {
        match self.direction_radius() {
            Some(radius) => Ok(self.to_spheric_with_radius(radius)),
            None => Err(CoordinateError::DegenerateCoordinate {
                x: self.x,
                y: self.y,
                z: self.z,
            }),
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    /// use nalgebra::Vector3;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = coord.to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        CartesianCoordinate {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    // Radius of a point with a well-defined direction
    fn direction_radius(&self) -> Option<f64> {
        let radius = self.magnitude();
        (radius != 0.0 && radius.is_finite()).then_some(radius)
    }

    fn to_spheric_with_radius(&self, radius: f64) -> SphericCoordinate {
        let theta = (self.z / radius).clamp(-1.0, 1.0).acos();

        // atan2 yields (-π, π]; the azimuth range is half-open at +π
        let mut phi = self.y.atan2(self.x);
        if phi >= PI {
            phi -= TAU;
        }

        SphericCoordinate::from_parts(phi, theta, radius)
    }
}

impl Coordinate for CartesianCoordinate {
    fn as_cartesian(&self) -> CartesianCoordinate {
        *self
    }

    fn as_spheric(&self) -> SphericCoordinate {
        if let Some(radius) = self.direction_radius() {
            return self.to_spheric_with_radius(radius);
        }

        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            debug!("origin has no spherical direction; using phi = 0, theta = 0");
        } else {
            warn!(
                "non-finite coordinate ({}, {}, {}) mapped to the spherical origin",
                self.x, self.y, self.z
            );
        }
        SphericCoordinate::from_parts(0.0, 0.0, 0.0)
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl From<SphericCoordinate> for CartesianCoordinate {
    fn from(spheric: SphericCoordinate) -> Self {
        spheric.as_cartesian()
    }
}

impl From<Vector3<f64>> for CartesianCoordinate {
    fn from(vec: Vector3<f64>) -> Self {
        CartesianCoordinate::from_vector3(vec)
    }
}

impl From<CartesianCoordinate> for Vector3<f64> {
    fn from(coord: CartesianCoordinate) -> Self {
        coord.to_vector3()
    }
}

// Componentwise difference, used by the shared distance algorithms
impl std::ops::Sub for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn sub(self, other: CartesianCoordinate) -> CartesianCoordinate {
        CartesianCoordinate {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
