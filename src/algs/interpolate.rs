//! Point interpolation and nearest-entity lookup on the axisymmetric mesh.
//!
//! Query points are `(r, z)` pairs. Interpolation is available for the
//! z-component of face fields: each query point becomes one row of a sparse
//! matrix over the full face vector (radial faces first, so vertical face `k`
//! is column `nFx + k`).
//!
//! Vertical-face samples sit at the radial cell centres. Between the last
//! cell centre and the outer boundary (the outer half cell) there is no
//! sample to the right, so values are linearly extrapolated from the last
//! two columns.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), cyl_mesh::mesh_error::CylMeshError> {
//! use cyl_mesh::prelude::*;
//!
//! let mesh = CylMesh::new(&[AxisSpec::Count(4), AxisSpec::Count(1), AxisSpec::Count(2)])?;
//! let q = mesh.interpolation_matrix(&[[0.3, 0.25]], GridLocation::VerticalFaces)?;
//! assert_eq!(q.nrows(), 1);
//! assert_eq!(q.ncols(), mesh.counts().n_f());
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use crate::algs::sparse::{Triplet, from_triplets};
use crate::geometry::measures::ensure_axisymmetric;
use crate::mesh::CylMesh;
use crate::mesh_error::CylMeshError;
use crate::topology::location::GridLocation;
use itertools::Itertools;
use nalgebra_sparse::CsrMatrix;

/// Index of the `location` entity closest to `point` in Euclidean `(r, z)`
/// distance. Ties resolve to the lowest index.
pub fn nearest(mesh: &CylMesh, point: [f64; 2], location: GridLocation) -> Result<usize, CylMeshError> {
    let grid = match location {
        GridLocation::Edges => mesh.grid_n()?,
        GridLocation::RadialFaces => mesh.grid_fr()?,
        GridLocation::VerticalFaces => mesh.grid_fz()?,
    };
    let [pr, pz] = point;
    let ind = grid
        .iter()
        .map(|[r, z]| ((r - pr).powi(2) + (z - pz).powi(2)).sqrt())
        .position_min_by(|a, b| a.total_cmp(b))
        .unwrap_or(0);
    Ok(ind)
}

/// Interpolation matrix from face values to `points`.
///
/// Only [`GridLocation::VerticalFaces`] is supported. All points are checked
/// against the mesh extent before any row is built.
pub fn interpolation_matrix(
    mesh: &CylMesh,
    points: &[[f64; 2]],
    location: GridLocation,
) -> Result<CsrMatrix<f64>, CylMeshError> {
    if location != GridLocation::VerticalFaces {
        return Err(CylMeshError::InterpolationNotImplemented(location));
    }
    ensure_axisymmetric(mesh.widths(), "vertical-face interpolation")?;

    let stencil = VerticalFaceStencil {
        ccx: mesh.vector_ccx(),
        nz: mesh.vector_nz(),
        r_max: mesh.vector_nx().last().copied().unwrap_or(0.0),
        tolerance: mesh.options().interface_tolerance,
    };
    if let Some(&[r, z]) = points.iter().find(|p| !stencil.contains(**p)) {
        return Err(CylMeshError::PointOutOfBounds { r, z });
    }

    let counts = mesh.counts();
    let offset = counts.n_fx();
    let mut triplets: Vec<Triplet> = Vec::with_capacity(4 * points.len());
    for (row, &point) in points.iter().enumerate() {
        triplets.extend(
            stencil
                .weights(point)
                .into_iter()
                .filter(|&(_, w)| w != 0.0)
                .map(|(k, w)| (row, offset + k, w)),
        );
    }
    Ok(from_triplets(points.len(), counts.n_f(), triplets))
}

/// Vertical-face sample layout: columns at radial cell centres, levels at
/// vertical nodes, r fastest.
struct VerticalFaceStencil<'a> {
    ccx: &'a [f64],
    nz: &'a [f64],
    r_max: f64,
    tolerance: f64,
}

impl VerticalFaceStencil<'_> {
    fn contains(&self, [r, z]: [f64; 2]) -> bool {
        let z_min = self.nz[0];
        let z_max = self.nz[self.nz.len() - 1];
        (0.0..=self.r_max).contains(&r) && (z_min..=z_max).contains(&z)
    }

    /// Sample column at or to the left of `r`.
    fn column(&self, r: f64) -> usize {
        self.ccx.partition_point(|&c| c <= r).saturating_sub(1)
    }

    fn weights(&self, [r, z]: [f64; 2]) -> Vec<(usize, f64)> {
        let nr = self.ccx.len();
        let col = self.column(r);
        let outer = col + 1 == nr;

        let nearest_level = self
            .nz
            .iter()
            .map(|&zn| (zn - z).abs())
            .position_min_by(|a, b| a.total_cmp(b))
            .filter(|&k| (self.nz[k] - z).abs() < self.tolerance);
        if let Some(level) = nearest_level {
            log::trace!("point ({r}, {z}) on interface {level}, column {col}");
            let at = |i: usize| level * nr + i;
            if nr == 1 {
                return vec![(at(0), 1.0)];
            }
            return if outer {
                let (rl, rll) = (self.ccx[col], self.ccx[col - 1]);
                let d = rl - rll;
                vec![(at(col), (r - rll) / d), (at(col - 1), -(r - rl) / d)]
            } else {
                let (rl, rr) = (self.ccx[col], self.ccx[col + 1]);
                let d = rr - rl;
                vec![(at(col), (rr - r) / d), (at(col + 1), (r - rl) / d)]
            };
        }

        let level = self
            .nz
            .partition_point(|&zn| zn <= z)
            .saturating_sub(1)
            .min(self.nz.len() - 2);
        log::trace!("point ({r}, {z}) inside layer {level}, column {col}");
        let below = |i: usize| level * nr + i;
        let above = |i: usize| (level + 1) * nr + i;
        let dz_below = z - self.nz[level];
        let dz_above = self.nz[level + 1] - z;
        let t = dz_below / (dz_below + dz_above);

        if nr == 1 {
            return vec![(below(0), 1.0 - t), (above(0), t)];
        }
        if outer {
            let dr = self.ccx[col] - self.ccx[col - 1];
            let dr_l = r - self.ccx[col];
            let dr_ll = r - self.ccx[col - 1];
            vec![
                (below(col - 1), -(1.0 - t) * dr_l / dr),
                (below(col), (1.0 - t) * dr_ll / dr),
                (above(col - 1), -t * dr_l / dr),
                (above(col), t * dr_ll / dr),
            ]
        } else {
            let dr_l = r - self.ccx[col];
            let dr_r = self.ccx[col + 1] - r;
            let drz = (dr_l + dr_r) * (dz_below + dz_above);
            vec![
                (below(col), dr_r * dz_above / drz),
                (below(col + 1), dr_l * dz_above / drz),
                (above(col), dr_r * dz_below / drz),
                (above(col + 1), dr_l * dz_below / drz),
            ]
        }
    }
}
