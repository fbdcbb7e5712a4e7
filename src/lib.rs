//! Locus: Cartesian and spherical coordinate value types
//!
//! This crate provides two immutable representations of a location in 3D
//! space, [`CartesianCoordinate`] and [`SphericCoordinate`], which convert
//! into each other and share a common set of geometric queries through the
//! [`Coordinate`] trait: tolerance-based equality, Euclidean distance and
//! central angle.
//!
//! ```rust
//! use locus::{CartesianCoordinate, Coordinate, SphericCoordinate};
//! use std::f64::consts::PI;
//!
//! let north = CartesianCoordinate::new(0.0, 0.0, 1.0);
//! let south = SphericCoordinate::new(0.0, PI, 1.0).unwrap();
//!
//! assert!((north.cartesian_distance(&south) - 2.0).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;

// Re-export commonly used types
pub use coordinates::cartesian::CartesianCoordinate;
pub use coordinates::spheric::SphericCoordinate;
pub use coordinates::{great_circle_angle, Coordinate};

/// Main error type for the locus library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A constructor argument lies outside its valid range
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human readable description of the accepted range
        expected: &'static str,
    },

    /// The point has no defined direction (azimuth and polar angle are undefined)
    #[error("degenerate coordinate ({x}, {y}, {z}) has no spherical direction")]
    DegenerateCoordinate {
        /// X-component of the rejected point
        x: f64,
        /// Y-component of the rejected point
        y: f64,
        /// Z-component of the rejected point
        z: f64,
    },
}

/// Result type for locus operations
pub type Result<T> = std::result::Result<T, CoordinateError>;
