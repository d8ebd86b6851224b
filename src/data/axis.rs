//! Per-axis cell widths for a cylindrical tensor mesh.
//!
//! Axis 0 is radial, axis 1 azimuthal and axis 2 vertical. A bare cell count
//! expands to a uniform partition: the unit interval for the radial and
//! vertical axes and a full revolution (`2π`) for the azimuthal axis.

use crate::mesh_error::CylMeshError;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Axis index of the radial direction.
pub const AXIS_R: usize = 0;
/// Axis index of the azimuthal direction.
pub const AXIS_THETA: usize = 1;
/// Axis index of the vertical direction.
pub const AXIS_Z: usize = 2;

/// Width specification for a single axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AxisSpec {
    /// `n` uniform cells.
    Count(usize),
    /// Explicit cell widths.
    Widths(Vec<f64>),
}

impl From<usize> for AxisSpec {
    fn from(n: usize) -> Self {
        AxisSpec::Count(n)
    }
}

impl From<Vec<f64>> for AxisSpec {
    fn from(widths: Vec<f64>) -> Self {
        AxisSpec::Widths(widths)
    }
}

impl From<&[f64]> for AxisSpec {
    fn from(widths: &[f64]) -> Self {
        AxisSpec::Widths(widths.to_vec())
    }
}

/// Validated, owned cell widths `(hr, hθ, hz)`.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisWidths {
    h: [Vec<f64>; 3],
}

impl AxisWidths {
    /// Expand and validate three axis specifications.
    ///
    /// The azimuthal widths must sum to `2π` within `theta_tolerance`.
    pub fn from_specs(specs: &[AxisSpec], theta_tolerance: f64) -> Result<Self, CylMeshError> {
        if specs.len() != 3 {
            return Err(CylMeshError::InvalidAxisSpec(format!(
                "expected 3 axis entries (use [hr, 1, hz] for an axisymmetric mesh), got {}",
                specs.len()
            )));
        }
        let h = [
            expand_axis(AXIS_R, &specs[AXIS_R])?,
            expand_axis(AXIS_THETA, &specs[AXIS_THETA])?,
            expand_axis(AXIS_Z, &specs[AXIS_Z])?,
        ];

        // A θ count spans 2π by construction.
        if let AxisSpec::Widths(_) = specs[AXIS_THETA] {
            let theta_sum: f64 = h[AXIS_THETA].iter().sum();
            if !((theta_sum - TAU).abs() <= theta_tolerance) {
                return Err(CylMeshError::InvalidAxisSpec(format!(
                    "theta widths must sum to 2*pi within {theta_tolerance}, got {theta_sum}"
                )));
            }
        }
        Ok(Self { h })
    }

    /// Radial widths.
    #[inline]
    pub fn hr(&self) -> &[f64] {
        &self.h[AXIS_R]
    }

    /// Azimuthal widths (radians).
    #[inline]
    pub fn htheta(&self) -> &[f64] {
        &self.h[AXIS_THETA]
    }

    /// Vertical widths.
    #[inline]
    pub fn hz(&self) -> &[f64] {
        &self.h[AXIS_Z]
    }

    /// Cell counts `[nr, nθ, nz]`.
    #[inline]
    pub fn lengths(&self) -> [usize; 3] {
        [self.h[0].len(), self.h[1].len(), self.h[2].len()]
    }
}

fn expand_axis(axis: usize, spec: &AxisSpec) -> Result<Vec<f64>, CylMeshError> {
    match spec {
        AxisSpec::Count(0) => Err(CylMeshError::InvalidAxisSpec(format!(
            "h[{axis}] must have a positive cell count"
        ))),
        AxisSpec::Count(n) => {
            let extent = if axis == AXIS_THETA { TAU } else { 1.0 };
            Ok(vec![extent / *n as f64; *n])
        }
        AxisSpec::Widths(widths) => {
            if widths.is_empty() {
                return Err(CylMeshError::InvalidAxisSpec(format!(
                    "h[{axis}] must not be empty"
                )));
            }
            if let Some((i, w)) = widths
                .iter()
                .enumerate()
                .find(|(_, w)| !w.is_finite() || **w <= 0.0)
            {
                return Err(CylMeshError::InvalidAxisSpec(format!(
                    "h[{axis}][{i}] = {w} is not a positive width"
                )));
            }
            Ok(widths.clone())
        }
    }
}

/// Validate a user-supplied origin.
pub fn parse_origin(origin: &[f64]) -> Result<[f64; 3], CylMeshError> {
    match origin {
        [r, t, z] if origin.iter().all(|x| x.is_finite()) => Ok([*r, *t, *z]),
        _ => Err(CylMeshError::InvalidAxisSpec(format!(
            "origin must have 3 finite entries, got {origin:?}"
        ))),
    }
}
