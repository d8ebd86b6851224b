//! Discrete edge curl for the axisymmetric mesh.
//!
//! Edge values are circulations around the azimuthal circles through each
//! node; face values are fluxes through the radial walls and vertical rings.
//! The operator is `diag(1/area) · [Dz; Dr] · diag(edge)` where `Dz` and `Dr`
//! are Kronecker products of 1D difference stencils with identities.

use crate::algs::sparse::{banded_triplets, diag_scale, from_triplets, kron, scaled, speye, vstack};
use crate::topology::counts::TopologyCounts;
use nalgebra_sparse::CsrMatrix;

/// Radial difference stencil (`nr × nr`): `+1` on the diagonal, `-1` below.
pub fn radial_difference(nr: usize) -> CsrMatrix<f64> {
    from_triplets(nr, nr, banded_triplets(nr, nr, &[(-1, -1.0), (0, 1.0)]))
}

/// Vertical difference stencil (`nz × (nz+1)`): `-1` on the diagonal, `+1` above.
pub fn vertical_difference(nz: usize) -> CsrMatrix<f64> {
    from_triplets(nz, nz + 1, banded_triplets(nz, nz + 1, &[(0, -1.0), (1, 1.0)]))
}

/// Assemble the edge curl from the edge lengths and face areas of an
/// axisymmetric mesh.
pub fn edge_curl(counts: &TopologyCounts, edge: &[f64], area: &[f64]) -> CsrMatrix<f64> {
    let nr = counts.n_cx();
    let nz = counts.n_cz();

    let dr = kron(&speye(counts.n_nz()), &radial_difference(nr));
    // Sign pinned by the golden curl test; consumers rely on it.
    let dz = scaled(&kron(&vertical_difference(nz), &speye(nr)), -1.0);

    let inv_area: Vec<f64> = area.iter().map(|a| 1.0 / a).collect();
    let curl = diag_scale(Some(inv_area.as_slice()), &vstack(&[&dz, &dr]), Some(edge));
    log::debug!("assembled edge curl: {}x{}", curl.nrows(), curl.ncols());
    curl
}
