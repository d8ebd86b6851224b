//! Averaging from edges and faces to cell centres.
//!
//! The first radial cell is centred on the symmetry axis and has no inner
//! neighbour, so its radial stencil weight is 1 instead of ½.

use crate::algs::sparse::{banded_triplets, from_triplets, kron, speye, vstack};
use crate::topology::counts::TopologyCounts;
use nalgebra_sparse::CsrMatrix;

/// Vertical averaging stencil (`(nz+1) × nz`), ½ on the diagonal and below.
pub fn vertical_average(nz: usize) -> CsrMatrix<f64> {
    from_triplets(nz + 1, nz, banded_triplets(nz + 1, nz, &[(-1, 0.5), (0, 0.5)]))
}

/// Radial averaging stencil (`nr × nr`), ½ on the diagonal and above, with
/// the axis cell weighted by 1.
pub fn radial_average(nr: usize) -> CsrMatrix<f64> {
    let triplets = banded_triplets(nr, nr, &[(0, 0.5), (1, 0.5)])
        .into_iter()
        .map(|(i, j, v)| if (i, j) == (0, 0) { (i, j, 1.0) } else { (i, j, v) });
    from_triplets(nr, nr, triplets)
}

/// Edge → cell-centre averaging (`nC × nE`).
pub fn ave_e2cc(counts: &TopologyCounts) -> CsrMatrix<f64> {
    let av = kron(&vertical_average(counts.n_cz()), &radial_average(counts.n_cx())).transpose();
    log::debug!("assembled edge averaging: {}x{}", av.nrows(), av.ncols());
    av
}

/// Face → cell-centre averaging (`nC × nF`), radial faces first.
pub fn ave_f2cc(counts: &TopologyCounts) -> CsrMatrix<f64> {
    let nr = counts.n_cx();
    let nz = counts.n_cz();
    let afr = kron(&speye(nz), &radial_average(nr));
    let afz = kron(&vertical_average(nz), &speye(nr));
    let av = vstack(&[&afr, &afz]).transpose();
    log::debug!("assembled face averaging: {}x{}", av.nrows(), av.ncols());
    av
}
