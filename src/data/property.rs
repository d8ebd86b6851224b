//! Material properties attached to mesh cells.

use crate::mesh_error::CylMeshError;
use serde::{Deserialize, Serialize};

/// A cell-wise material property (conductivity, permeability, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialProperty {
    /// The same value in every cell.
    Uniform(f64),
    /// One value per cell, r fastest then z.
    PerCell(Vec<f64>),
    /// One value per vertical layer, shared by every radial cell of the layer.
    PerLayer(Vec<f64>),
}

impl Default for MaterialProperty {
    fn default() -> Self {
        MaterialProperty::Uniform(1.0)
    }
}

impl From<f64> for MaterialProperty {
    fn from(value: f64) -> Self {
        MaterialProperty::Uniform(value)
    }
}

impl MaterialProperty {
    /// Resolve to one value per cell for a mesh with `n_radial` cells per
    /// layer and `n_layers` layers.
    pub fn per_cell(&self, n_radial: usize, n_layers: usize) -> Result<Vec<f64>, CylMeshError> {
        let n_cells = n_radial * n_layers;
        match self {
            MaterialProperty::Uniform(v) => Ok(vec![*v; n_cells]),
            MaterialProperty::PerCell(values) => {
                if values.len() != n_cells {
                    return Err(CylMeshError::InvalidPropertyShape {
                        expected: n_cells,
                        found: values.len(),
                    });
                }
                Ok(values.clone())
            }
            MaterialProperty::PerLayer(layers) => {
                if layers.len() != n_layers {
                    return Err(CylMeshError::InvalidPropertyShape {
                        expected: n_layers,
                        found: layers.len(),
                    });
                }
                Ok(layers
                    .iter()
                    .flat_map(|&v| std::iter::repeat_n(v, n_radial))
                    .collect())
            }
        }
    }
}
