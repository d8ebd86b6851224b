//! Property-weighted mass matrices and their property derivatives.

use crate::algs::sparse::{diag_scale, mat_vec, sdiag};
use nalgebra_sparse::CsrMatrix;

/// Diagonal mass matrix `diag(Avᵀ · (vol ⊙ sigma))` for an averaging
/// operator `av` (`nC × nEntities`).
pub fn mass_matrix(av: &CsrMatrix<f64>, vol: &[f64], sigma: &[f64]) -> CsrMatrix<f64> {
    let weighted: Vec<f64> = vol.iter().zip(sigma).map(|(v, s)| v * s).collect();
    sdiag(&mat_vec(&av.transpose(), &weighted))
}

/// Derivative of the mass-matrix diagonal with respect to the per-cell
/// property: `Avᵀ · diag(vol)` (`nEntities × nC`).
pub fn mass_deriv(av: &CsrMatrix<f64>, vol: &[f64]) -> CsrMatrix<f64> {
    diag_scale(None, &av.transpose(), Some(vol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::sparse::from_triplets;

    #[test]
    fn deriv_times_property_is_mass_diagonal() {
        let av = from_triplets(2, 3, [(0, 0, 0.5), (0, 1, 0.5), (1, 1, 0.5), (1, 2, 0.5)]);
        let vol = [2.0, 4.0];
        let sigma = [1.0, 3.0];
        let m = mass_matrix(&av, &vol, &sigma);
        let d = mat_vec(&mass_deriv(&av, &vol), &sigma);
        assert_eq!(d, vec![1.0, 7.0, 6.0]);
        for (i, want) in d.iter().enumerate() {
            assert_eq!(m.get_entry(i, i).unwrap().into_value(), *want);
        }
        assert_eq!(m.nnz(), 3);
    }
}
