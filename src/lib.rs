#![cfg_attr(docsrs, feature(doc_cfg))]
//! # cyl-mesh
//!
//! cyl-mesh builds the discrete geometry and finite-volume operators of a
//! structured cylindrical `(r, θ, z)` tensor mesh, for solvers of
//! electromagnetic and potential-field problems on axisymmetric domains.
//!
//! ## Features
//! - Per-axis width specifications with uniform or explicit cell widths
//! - Node/edge/face/cell counts, with the axisymmetric (single θ cell) reduction
//! - Grid vectors, `(r, z)` location grids, edge lengths, face areas and cell volumes
//! - Sparse edge curl, edge/face averaging, mass matrices and their property derivatives
//! - Vertical-face interpolation matrices and nearest-entity lookup
//!
//! ## Scope
//! Geometric measures and operators are implemented for axisymmetric meshes
//! only. Meshes with several azimuthal cells can be built and counted, but
//! asking them for geometry fails with
//! [`CylMeshError::NotImplementedGeometry`](mesh_error::CylMeshError::NotImplementedGeometry).
//!
//! ## Caching
//! A [`CylMesh`](mesh::CylMesh) is immutable. Grid vectors, measures, the edge
//! curl and the averaging operators are computed on first access and reused
//! for the lifetime of the mesh.
//!
//! ## Logging
//! The crate logs through the [`log`] facade (`debug` when cached quantities
//! are materialised, `trace` for per-point interpolation decisions) and never
//! installs a logger itself.

pub mod algs;
pub mod data;
pub mod geometry;
pub mod mesh;
pub mod mesh_error;
pub mod operators;
pub mod topology;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::data::axis::{AxisSpec, AxisWidths};
    pub use crate::data::property::MaterialProperty;
    pub use crate::mesh::{CylMesh, CylMeshOptions};
    pub use crate::mesh_error::CylMeshError;
    pub use crate::topology::counts::TopologyCounts;
    pub use crate::topology::location::{GridLocation, MassLocation};
    pub use nalgebra_sparse::CsrMatrix;
}
