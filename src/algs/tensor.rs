//! Dense tensor-product helpers over 1D grid vectors.

use itertools::iproduct;

/// Running sum `[a0, a0+a1, ...]`.
pub fn cumsum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Left edges of consecutive intervals: `[0, a0, a0+a1, ...]`, one per width.
pub fn starts(widths: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(widths.len());
    out.push(0.0);
    out.extend(cumsum(&widths[..widths.len().saturating_sub(1)]));
    out.truncate(widths.len());
    out
}

/// Kronecker product of two vectors: `a` varies slowest.
pub fn kron_vec(a: &[f64], b: &[f64]) -> Vec<f64> {
    iproduct!(a.iter(), b.iter()).map(|(x, y)| x * y).collect()
}

/// All `(x, y)` pairs with `x` varying fastest.
pub fn ndgrid(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    iproduct!(y.iter(), x.iter()).map(|(&yv, &xv)| [xv, yv]).collect()
}

/// Areas of the rings between consecutive radii, the first ring being the
/// disc inside `radii[0]`.
pub fn ring_areas(radii: &[f64]) -> Vec<f64> {
    let mut inner = 0.0;
    radii
        .iter()
        .map(|&outer| {
            let area = std::f64::consts::PI * (outer * outer - inner * inner);
            inner = outer;
            area
        })
        .collect()
}
