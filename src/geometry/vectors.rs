//! Nodal and cell-centred grid vectors, and the `(r, z)` location grids built
//! from them.
//!
//! On an axisymmetric mesh the first radial cell is centred on the symmetry
//! axis: cell centres sit at `0, hr[0]/2 + hr[1]/2, ...` and the radial nodes
//! at the outer side of each cell, starting at `hr[0]/2`. With more than one
//! azimuthal cell the usual tensor layout applies (nodes at `0, hr[0], ...`).

use crate::algs::tensor::{cumsum, ndgrid, starts};
use crate::data::axis::AxisWidths;

/// The six 1D grid vectors of a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct GridVectors {
    pub nx: Vec<f64>,
    pub ny: Vec<f64>,
    pub nz: Vec<f64>,
    pub ccx: Vec<f64>,
    pub ccy: Vec<f64>,
    pub ccz: Vec<f64>,
}

impl GridVectors {
    /// Compute every grid vector, with vertical coordinates offset by `z0`.
    pub fn new(widths: &AxisWidths, z0: f64) -> Self {
        log::debug!("computing grid vectors for cells {:?}", widths.lengths());
        Self {
            nx: vector_nx(widths),
            ny: vector_ny(widths),
            nz: vector_nz(widths, z0),
            ccx: vector_ccx(widths),
            ccy: vector_ccy(widths),
            ccz: vector_ccz(widths, z0),
        }
    }
}

/// Radial node coordinates.
pub fn vector_nx(widths: &AxisWidths) -> Vec<f64> {
    let hr = widths.hr();
    if widths.htheta().len() == 1 {
        let shift = hr[0] / 2.0;
        cumsum(hr).into_iter().map(|r| r - shift).collect()
    } else {
        let mut out = vec![0.0];
        out.extend(cumsum(hr));
        out
    }
}

/// Radial cell-centre coordinates.
pub fn vector_ccx(widths: &AxisWidths) -> Vec<f64> {
    let hr = widths.hr();
    let shift = if widths.htheta().len() == 1 { hr[0] / 2.0 } else { 0.0 };
    starts(hr)
        .into_iter()
        .zip(hr)
        .map(|(s, h)| s + h / 2.0 - shift)
        .collect()
}

/// Azimuthal node angles; empty on an axisymmetric mesh.
pub fn vector_ny(widths: &AxisWidths) -> Vec<f64> {
    let ht = widths.htheta();
    if ht.len() == 1 {
        return Vec::new();
    }
    let shift = ht[0] / 2.0;
    starts(ht).into_iter().map(|t| t + shift).collect()
}

/// Azimuthal cell-centre angles.
pub fn vector_ccy(widths: &AxisWidths) -> Vec<f64> {
    starts(widths.htheta())
}

/// Vertical node coordinates.
pub fn vector_nz(widths: &AxisWidths, z0: f64) -> Vec<f64> {
    let mut out = vec![z0];
    out.extend(cumsum(widths.hz()).into_iter().map(|z| z + z0));
    out
}

/// Vertical cell-centre coordinates.
pub fn vector_ccz(widths: &AxisWidths, z0: f64) -> Vec<f64> {
    let hz = widths.hz();
    starts(hz)
        .into_iter()
        .zip(hz)
        .map(|(s, h)| z0 + s + h / 2.0)
        .collect()
}

/// Node (and azimuthal edge) locations, r fastest.
pub fn grid_n(widths: &AxisWidths, z0: f64) -> Vec<[f64; 2]> {
    ndgrid(&vector_nx(widths), &vector_nz(widths, z0))
}

/// Radial face locations, r fastest.
pub fn grid_fr(widths: &AxisWidths, z0: f64) -> Vec<[f64; 2]> {
    ndgrid(&vector_nx(widths), &vector_ccz(widths, z0))
}

/// Vertical face locations, r fastest.
pub fn grid_fz(widths: &AxisWidths, z0: f64) -> Vec<[f64; 2]> {
    ndgrid(&vector_ccx(widths), &vector_nz(widths, z0))
}

/// Cell-centre locations, r fastest.
pub fn grid_cc(widths: &AxisWidths, z0: f64) -> Vec<[f64; 2]> {
    ndgrid(&vector_ccx(widths), &vector_ccz(widths, z0))
}
