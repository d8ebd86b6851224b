//! Sparse finite-volume operators of the axisymmetric cylindrical mesh.
//!
//! The functions here are pure assemblers over topology counts and geometric
//! measures; [`CylMesh`](crate::mesh::CylMesh) caches their results.

pub mod average;
pub mod curl;
pub mod mass;

pub use average::{ave_e2cc, ave_f2cc};
pub use curl::edge_curl;
pub use mass::{mass_deriv, mass_matrix};
