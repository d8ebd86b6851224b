#![allow(dead_code)]
use cyl_mesh::prelude::*;

/// Uniform mesh over the unit cylinder.
pub fn uniform(nr: usize, ntheta: usize, nz: usize) -> CylMesh {
    CylMesh::uniform([nr, ntheta, nz]).unwrap()
}

/// Dense row-major copy of a sparse matrix.
pub fn dense(a: &CsrMatrix<f64>) -> Vec<Vec<f64>> {
    let mut out = vec![vec![0.0; a.ncols()]; a.nrows()];
    for (i, j, v) in a.triplet_iter() {
        out[i][j] += *v;
    }
    out
}

/// Element-wise comparison of two dense matrices.
pub fn assert_dense_close(got: &[Vec<f64>], want: &[Vec<f64>], tol: f64) {
    assert_eq!(got.len(), want.len(), "row count differs");
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        assert_eq!(g.len(), w.len(), "column count differs in row {i}");
        for (j, (a, b)) in g.iter().zip(w).enumerate() {
            assert!((a - b).abs() <= tol, "entry ({i}, {j}): got {a}, want {b}");
        }
    }
}

/// Diagonal of a square sparse matrix.
pub fn diagonal(a: &CsrMatrix<f64>) -> Vec<f64> {
    (0..a.nrows())
        .map(|i| a.get_entry(i, i).map(|e| e.into_value()).unwrap_or(0.0))
        .collect()
}
