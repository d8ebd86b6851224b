//! CylMeshError: unified error type for cyl-mesh public APIs
//!
//! Every fallible operation in the crate returns this type; library code does
//! not panic on malformed input.

use crate::topology::location::GridLocation;
use thiserror::Error;

/// Unified error type for cylindrical mesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CylMeshError {
    /// Malformed or inconsistent axis/origin specification at construction.
    #[error("Invalid axis specification: {0}")]
    InvalidAxisSpec(String),
    /// A geometric quantity (or an operator built on one) was requested for a
    /// mesh with more than one azimuthal cell.
    #[error("`{quantity}` is only implemented for axisymmetric meshes (got {n_theta} theta cells)")]
    NotImplementedGeometry {
        quantity: &'static str,
        n_theta: usize,
    },
    /// A material property does not resolve to exactly one value per cell.
    #[error("Material property has {found} values, expected {expected}")]
    InvalidPropertyShape { expected: usize, found: usize },
    /// An unrecognised location string was supplied.
    #[error("Invalid location type `{0}`")]
    InvalidLocationType(String),
    /// Interpolation is only available for vertical faces.
    #[error("Interpolation to {0:?} is not implemented")]
    InterpolationNotImplemented(GridLocation),
    /// A query point lies outside the radial or vertical extent of the mesh.
    #[error("Point (r={r}, z={z}) lies outside of the mesh")]
    PointOutOfBounds { r: f64, z: f64 },
}
