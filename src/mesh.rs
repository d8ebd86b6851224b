//! The cylindrical tensor mesh and its write-once geometry/operator caches.
//!
//! A [`CylMesh`] is immutable after construction. Grid vectors, geometric
//! measures and the cached operators are computed on first access and kept
//! for the lifetime of the mesh.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), cyl_mesh::mesh_error::CylMeshError> {
//! use cyl_mesh::prelude::*;
//!
//! let mesh = CylMesh::uniform([4, 1, 3])?;
//! assert!(mesh.is_axisymmetric());
//! assert_eq!(mesh.counts().n_n(), 16);
//!
//! let curl = mesh.edge_curl()?;
//! assert_eq!(curl.nrows(), mesh.counts().n_f());
//!
//! let m = mesh.edge_mass(Some(&MaterialProperty::Uniform(2.0)))?;
//! assert_eq!(m.nrows(), mesh.counts().n_e());
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use crate::algs::interpolate;
use crate::data::axis::{AxisSpec, AxisWidths, parse_origin};
use crate::data::property::MaterialProperty;
use crate::geometry::measures::{self, ensure_axisymmetric};
use crate::geometry::vectors::{self, GridVectors};
use crate::mesh_error::CylMeshError;
use crate::operators;
use crate::topology::counts::TopologyCounts;
use crate::topology::location::{GridLocation, MassLocation};
use nalgebra_sparse::CsrMatrix;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Tolerances used while building and querying a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylMeshOptions {
    /// Allowed deviation of `sum(hθ)` from `2π`.
    pub theta_tolerance: f64,
    /// Distance in z below which a query point is treated as lying on a
    /// horizontal grid interface.
    pub interface_tolerance: f64,
}

impl Default for CylMeshOptions {
    fn default() -> Self {
        Self {
            theta_tolerance: 1e-10,
            interface_tolerance: 1e-3,
        }
    }
}

impl CylMeshOptions {
    /// Both tolerances must be finite and non-negative.
    pub fn validate(&self) -> Result<(), CylMeshError> {
        for (name, tol) in [
            ("theta_tolerance", self.theta_tolerance),
            ("interface_tolerance", self.interface_tolerance),
        ] {
            if !tol.is_finite() || tol < 0.0 {
                return Err(CylMeshError::InvalidAxisSpec(format!(
                    "{name} must be finite and non-negative, got {tol}"
                )));
            }
        }
        Ok(())
    }
}

/// Structured cylindrical mesh `(r, θ, z)`.
#[derive(Debug)]
pub struct CylMesh {
    widths: AxisWidths,
    origin: [f64; 3],
    options: CylMeshOptions,
    counts: TopologyCounts,
    vectors: OnceCell<GridVectors>,
    edge: OnceCell<Vec<f64>>,
    area: OnceCell<Vec<f64>>,
    vol: OnceCell<Vec<f64>>,
    edge_curl: OnceCell<CsrMatrix<f64>>,
    ave_e2cc: OnceCell<CsrMatrix<f64>>,
    ave_f2cc: OnceCell<CsrMatrix<f64>>,
}

static_assertions::assert_impl_all!(CylMesh: Send, Sync);

impl CylMesh {
    /// Mesh type tag.
    pub const MESH_TYPE: &'static str = "CYL";

    /// Build a mesh from three axis specifications with the origin at zero.
    ///
    /// Use `[hr, 1, hz]` for an axisymmetric mesh.
    pub fn new(specs: &[AxisSpec]) -> Result<Self, CylMeshError> {
        Self::with_options(specs, None, CylMeshOptions::default())
    }

    /// Uniform mesh over the unit cylinder with `[nr, nθ, nz]` cells.
    pub fn uniform(n_cells: [usize; 3]) -> Result<Self, CylMeshError> {
        Self::new(&n_cells.map(AxisSpec::Count))
    }

    /// Build a mesh with an explicit origin `[r0, θ0, z0]`.
    pub fn with_origin(specs: &[AxisSpec], origin: &[f64]) -> Result<Self, CylMeshError> {
        Self::with_options(specs, Some(origin), CylMeshOptions::default())
    }

    /// Build a mesh with an optional origin and explicit tolerances.
    pub fn with_options(
        specs: &[AxisSpec],
        origin: Option<&[f64]>,
        options: CylMeshOptions,
    ) -> Result<Self, CylMeshError> {
        options.validate()?;
        let widths = AxisWidths::from_specs(specs, options.theta_tolerance)?;
        let origin = origin.map(parse_origin).transpose()?.unwrap_or([0.0; 3]);
        let counts = TopologyCounts::new(widths.lengths());
        log::debug!(
            "created cylindrical mesh with cells {:?} (axisymmetric: {})",
            counts.vn_c(),
            counts.is_axisymmetric()
        );
        Ok(Self {
            widths,
            origin,
            options,
            counts,
            vectors: OnceCell::new(),
            edge: OnceCell::new(),
            area: OnceCell::new(),
            vol: OnceCell::new(),
            edge_curl: OnceCell::new(),
            ave_e2cc: OnceCell::new(),
            ave_f2cc: OnceCell::new(),
        })
    }

    #[inline]
    pub fn mesh_type(&self) -> &'static str {
        Self::MESH_TYPE
    }

    #[inline]
    pub fn widths(&self) -> &AxisWidths {
        &self.widths
    }

    #[inline]
    pub fn hr(&self) -> &[f64] {
        self.widths.hr()
    }

    #[inline]
    pub fn htheta(&self) -> &[f64] {
        self.widths.htheta()
    }

    #[inline]
    pub fn hz(&self) -> &[f64] {
        self.widths.hz()
    }

    #[inline]
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    #[inline]
    pub fn options(&self) -> &CylMeshOptions {
        &self.options
    }

    /// Entity counts.
    #[inline]
    pub fn counts(&self) -> &TopologyCounts {
        &self.counts
    }

    #[inline]
    pub fn is_axisymmetric(&self) -> bool {
        self.counts.is_axisymmetric()
    }

    // ---- grid vectors --------------------------------------------------

    fn vectors(&self) -> &GridVectors {
        self.vectors
            .get_or_init(|| GridVectors::new(&self.widths, self.origin[2]))
    }

    pub fn vector_nx(&self) -> &[f64] {
        &self.vectors().nx
    }

    pub fn vector_ny(&self) -> &[f64] {
        &self.vectors().ny
    }

    pub fn vector_nz(&self) -> &[f64] {
        &self.vectors().nz
    }

    pub fn vector_ccx(&self) -> &[f64] {
        &self.vectors().ccx
    }

    pub fn vector_ccy(&self) -> &[f64] {
        &self.vectors().ccy
    }

    pub fn vector_ccz(&self) -> &[f64] {
        &self.vectors().ccz
    }

    // ---- (r, z) location grids ----------------------------------------

    /// Node locations (azimuthal edges pass through them).
    pub fn grid_n(&self) -> Result<Vec<[f64; 2]>, CylMeshError> {
        ensure_axisymmetric(&self.widths, "node grid")?;
        Ok(vectors::grid_n(&self.widths, self.origin[2]))
    }

    /// Radial face locations.
    pub fn grid_fr(&self) -> Result<Vec<[f64; 2]>, CylMeshError> {
        ensure_axisymmetric(&self.widths, "radial face grid")?;
        Ok(vectors::grid_fr(&self.widths, self.origin[2]))
    }

    /// Vertical face locations.
    pub fn grid_fz(&self) -> Result<Vec<[f64; 2]>, CylMeshError> {
        ensure_axisymmetric(&self.widths, "vertical face grid")?;
        Ok(vectors::grid_fz(&self.widths, self.origin[2]))
    }

    /// Cell-centre locations.
    pub fn grid_cc(&self) -> Result<Vec<[f64; 2]>, CylMeshError> {
        ensure_axisymmetric(&self.widths, "cell centre grid")?;
        Ok(vectors::grid_cc(&self.widths, self.origin[2]))
    }

    // ---- measures ------------------------------------------------------

    /// Azimuthal edge lengths (`2πr` per node).
    pub fn edge_lengths(&self) -> Result<&[f64], CylMeshError> {
        self.edge
            .get_or_try_init(|| measures::edge_lengths(&self.widths))
            .map(Vec::as_slice)
    }

    /// Face areas, radial faces first.
    pub fn face_areas(&self) -> Result<&[f64], CylMeshError> {
        self.area
            .get_or_try_init(|| measures::face_areas(&self.widths))
            .map(Vec::as_slice)
    }

    /// Cell volumes.
    pub fn cell_volumes(&self) -> Result<&[f64], CylMeshError> {
        self.vol
            .get_or_try_init(|| measures::cell_volumes(&self.widths))
            .map(Vec::as_slice)
    }

    // ---- operators -----------------------------------------------------

    /// Edge curl (`nF × nE`).
    pub fn edge_curl(&self) -> Result<&CsrMatrix<f64>, CylMeshError> {
        self.edge_curl.get_or_try_init(|| {
            let edge = self.edge_lengths()?;
            let area = self.face_areas()?;
            Ok(operators::edge_curl(&self.counts, edge, area))
        })
    }

    /// Edge → cell-centre averaging (`nC × nE`).
    pub fn ave_e2cc(&self) -> Result<&CsrMatrix<f64>, CylMeshError> {
        self.ave_e2cc.get_or_try_init(|| {
            ensure_axisymmetric(&self.widths, "edge averaging")?;
            Ok(operators::ave_e2cc(&self.counts))
        })
    }

    /// Face → cell-centre averaging (`nC × nF`).
    pub fn ave_f2cc(&self) -> Result<&CsrMatrix<f64>, CylMeshError> {
        self.ave_f2cc.get_or_try_init(|| {
            ensure_axisymmetric(&self.widths, "face averaging")?;
            Ok(operators::ave_f2cc(&self.counts))
        })
    }

    /// Derivative of the edge mass diagonal with respect to the cell property.
    pub fn edge_mass_deriv(&self) -> Result<CsrMatrix<f64>, CylMeshError> {
        Ok(operators::mass_deriv(self.ave_e2cc()?, self.cell_volumes()?))
    }

    /// Derivative of the face mass diagonal with respect to the cell property.
    pub fn face_mass_deriv(&self) -> Result<CsrMatrix<f64>, CylMeshError> {
        Ok(operators::mass_deriv(self.ave_f2cc()?, self.cell_volumes()?))
    }

    /// Diagonal mass matrix on edges or faces. A missing property means a
    /// uniform value of 1.
    pub fn mass_matrix(
        &self,
        property: Option<&MaterialProperty>,
        location: MassLocation,
    ) -> Result<CsrMatrix<f64>, CylMeshError> {
        let av = match location {
            MassLocation::Edges => self.ave_e2cc()?,
            MassLocation::Faces => self.ave_f2cc()?,
        };
        let vol = self.cell_volumes()?;
        let default = MaterialProperty::default();
        let sigma = property
            .unwrap_or(&default)
            .per_cell(self.counts.n_cx(), self.counts.n_cz())?;
        Ok(operators::mass_matrix(av, vol, &sigma))
    }

    /// Edge mass matrix.
    pub fn edge_mass(&self, property: Option<&MaterialProperty>) -> Result<CsrMatrix<f64>, CylMeshError> {
        self.mass_matrix(property, MassLocation::Edges)
    }

    /// Face mass matrix.
    pub fn face_mass(&self, property: Option<&MaterialProperty>) -> Result<CsrMatrix<f64>, CylMeshError> {
        self.mass_matrix(property, MassLocation::Faces)
    }

    // ---- point queries -------------------------------------------------

    /// Interpolation matrix from face values to `(r, z)` points.
    pub fn interpolation_matrix(
        &self,
        points: &[[f64; 2]],
        location: GridLocation,
    ) -> Result<CsrMatrix<f64>, CylMeshError> {
        interpolate::interpolation_matrix(self, points, location)
    }

    /// Index of the `location` entity nearest to `point`.
    pub fn nearest(&self, point: [f64; 2], location: GridLocation) -> Result<usize, CylMeshError> {
        interpolate::nearest(self, point, location)
    }
}
