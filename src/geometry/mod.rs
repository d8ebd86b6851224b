//! Geometry of the cylindrical mesh.
//!
//! [`vectors`] holds the 1D grid vectors and `(r, z)` location grids;
//! [`measures`] the edge lengths, face areas and cell volumes.

pub mod measures;
pub mod vectors;

pub use measures::{cell_volumes, edge_lengths, ensure_axisymmetric, face_areas};
pub use vectors::GridVectors;
