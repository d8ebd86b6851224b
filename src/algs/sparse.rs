//! Sparse-matrix building blocks on top of `nalgebra-sparse`.
//!
//! Operators are assembled as `(row, col, value)` triplets, accumulated in a
//! [`CooMatrix`] (duplicates are summed) and frozen into a [`CsrMatrix`].

use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// A `(row, col, value)` entry.
pub type Triplet = (usize, usize, f64);

/// Freeze triplets into a CSR matrix. Duplicate entries are summed.
///
/// Every triplet must lie inside `nrows × ncols`.
pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> CsrMatrix<f64>
where
    I: IntoIterator<Item = Triplet>,
{
    let mut coo = CooMatrix::new(nrows, ncols);
    for (i, j, v) in triplets {
        coo.push(i, j, v);
    }
    CsrMatrix::from(&coo)
}

/// Constant diagonals: entry `(i, i + k) = v` for every `(k, v)` in `diagonals`
/// that falls inside the matrix.
pub fn banded_triplets(nrows: usize, ncols: usize, diagonals: &[(isize, f64)]) -> Vec<Triplet> {
    let mut out = Vec::new();
    for i in 0..nrows {
        for &(k, v) in diagonals {
            let j = i as isize + k;
            if j >= 0 && (j as usize) < ncols {
                out.push((i, j as usize, v));
            }
        }
    }
    out
}

/// Identity of size `n`.
pub fn speye(n: usize) -> CsrMatrix<f64> {
    from_triplets(n, n, (0..n).map(|i| (i, i, 1.0)))
}

/// Diagonal matrix with `diag` on the main diagonal.
pub fn sdiag(diag: &[f64]) -> CsrMatrix<f64> {
    let n = diag.len();
    from_triplets(n, n, diag.iter().enumerate().map(|(i, &v)| (i, i, v)))
}

/// Kronecker product `a ⊗ b`.
pub fn kron(a: &CsrMatrix<f64>, b: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    let (br, bc) = (b.nrows(), b.ncols());
    let mut triplets = Vec::with_capacity(a.nnz() * b.nnz());
    for (ia, ja, va) in a.triplet_iter() {
        for (ib, jb, vb) in b.triplet_iter() {
            triplets.push((ia * br + ib, ja * bc + jb, va * vb));
        }
    }
    from_triplets(a.nrows() * br, a.ncols() * bc, triplets)
}

/// Stack matrices with equal column counts on top of each other.
pub fn vstack(blocks: &[&CsrMatrix<f64>]) -> CsrMatrix<f64> {
    let ncols = blocks.first().map(|b| b.ncols()).unwrap_or(0);
    debug_assert!(blocks.iter().all(|b| b.ncols() == ncols));
    let mut triplets = Vec::with_capacity(blocks.iter().map(|b| b.nnz()).sum());
    let mut row0 = 0;
    for block in blocks {
        triplets.extend(block.triplet_iter().map(|(i, j, v)| (row0 + i, j, *v)));
        row0 += block.nrows();
    }
    from_triplets(row0, ncols, triplets)
}

/// `s · a` for a scalar `s`.
pub fn scaled(a: &CsrMatrix<f64>, s: f64) -> CsrMatrix<f64> {
    from_triplets(
        a.nrows(),
        a.ncols(),
        a.triplet_iter().map(|(i, j, v)| (i, j, s * v)),
    )
}

/// `diag(left) · a · diag(right)`; `None` stands for the identity.
pub fn diag_scale(left: Option<&[f64]>, a: &CsrMatrix<f64>, right: Option<&[f64]>) -> CsrMatrix<f64> {
    debug_assert!(left.is_none_or(|l| l.len() == a.nrows()));
    debug_assert!(right.is_none_or(|r| r.len() == a.ncols()));
    from_triplets(
        a.nrows(),
        a.ncols(),
        a.triplet_iter().map(|(i, j, v)| {
            let l = left.map_or(1.0, |l| l[i]);
            let r = right.map_or(1.0, |r| r[j]);
            (i, j, l * v * r)
        }),
    )
}

/// Matrix-vector product `a · x`.
pub fn mat_vec(a: &CsrMatrix<f64>, x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.ncols(), x.len());
    a.row_iter()
        .map(|row| {
            row.col_indices()
                .iter()
                .zip(row.values())
                .map(|(&j, v)| v * x[j])
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(a: &CsrMatrix<f64>) -> Vec<Vec<f64>> {
        let mut out = vec![vec![0.0; a.ncols()]; a.nrows()];
        for (i, j, v) in a.triplet_iter() {
            out[i][j] += *v;
        }
        out
    }

    #[test]
    fn banded_rectangular() {
        let d = from_triplets(2, 3, banded_triplets(2, 3, &[(0, -1.0), (1, 1.0)]));
        assert_eq!(dense(&d), vec![vec![-1.0, 1.0, 0.0], vec![0.0, -1.0, 1.0]]);
    }

    #[test]
    fn kron_with_identity() {
        let a = from_triplets(1, 2, [(0, 0, 1.0), (0, 1, 2.0)]);
        let k = kron(&speye(2), &a);
        assert_eq!(
            dense(&k),
            vec![vec![1.0, 2.0, 0.0, 0.0], vec![0.0, 0.0, 1.0, 2.0]]
        );
        let k = kron(&a, &speye(2));
        assert_eq!(
            dense(&k),
            vec![vec![1.0, 0.0, 2.0, 0.0], vec![0.0, 1.0, 0.0, 2.0]]
        );
    }

    #[test]
    fn stack_scale_and_multiply() {
        let a = speye(2);
        let b = from_triplets(1, 2, [(0, 1, 3.0)]);
        let s = vstack(&[&a, &b]);
        assert_eq!(s.nrows(), 3);
        let s = diag_scale(Some(&[1.0, 2.0, 0.5][..]), &s, Some(&[10.0, 1.0][..]));
        assert_eq!(dense(&s), vec![vec![10.0, 0.0], vec![0.0, 2.0], vec![0.0, 1.5]]);
        assert_eq!(mat_vec(&s, &[1.0, 1.0]), vec![10.0, 2.0, 1.5]);
        assert_eq!(dense(&scaled(&a, -1.0)), vec![vec![-1.0, 0.0], vec![0.0, -1.0]]);
        assert_eq!(dense(&sdiag(&[2.0, 3.0])), vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
    }
}
