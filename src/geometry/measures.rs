//! Edge lengths, face areas and cell volumes of an axisymmetric mesh.
//!
//! Each azimuthal edge is the full circle through its node, so its length is
//! `2πr`. Radial faces are cylinder walls (`2πr·hz`) and vertical faces are
//! rings between consecutive radial nodes. Only meshes with one azimuthal
//! cell are supported; every function fails with
//! [`CylMeshError::NotImplementedGeometry`] otherwise.

use crate::algs::tensor::{kron_vec, ring_areas};
use crate::data::axis::AxisWidths;
use crate::geometry::vectors::{grid_n, vector_nx};
use crate::mesh_error::CylMeshError;
use std::f64::consts::TAU;

/// Fail unless the mesh has a single azimuthal cell.
pub fn ensure_axisymmetric(widths: &AxisWidths, quantity: &'static str) -> Result<(), CylMeshError> {
    let n_theta = widths.htheta().len();
    if n_theta == 1 {
        Ok(())
    } else {
        Err(CylMeshError::NotImplementedGeometry { quantity, n_theta })
    }
}

/// Length of the azimuthal edge through every node, r fastest.
pub fn edge_lengths(widths: &AxisWidths) -> Result<Vec<f64>, CylMeshError> {
    ensure_axisymmetric(widths, "edge lengths")?;
    Ok(grid_n(widths, 0.0).iter().map(|[r, _]| TAU * r).collect())
}

/// Face areas: radial faces first, then vertical faces.
pub fn face_areas(widths: &AxisWidths) -> Result<Vec<f64>, CylMeshError> {
    ensure_axisymmetric(widths, "face areas")?;
    let nx = vector_nx(widths);
    let circumference: Vec<f64> = nx.iter().map(|r| TAU * r).collect();
    let mut areas = kron_vec(widths.hz(), &circumference);
    let levels = vec![1.0; widths.hz().len() + 1];
    areas.extend(kron_vec(&levels, &ring_areas(&nx)));
    Ok(areas)
}

/// Cell volumes, r fastest.
pub fn cell_volumes(widths: &AxisWidths) -> Result<Vec<f64>, CylMeshError> {
    ensure_axisymmetric(widths, "cell volumes")?;
    Ok(kron_vec(widths.hz(), &ring_areas(&vector_nx(widths))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::axis::AxisSpec;
    use std::f64::consts::PI;

    fn uniform(nr: usize, nt: usize, nz: usize) -> AxisWidths {
        AxisWidths::from_specs(&[AxisSpec::Count(nr), AxisSpec::Count(nt), AxisSpec::Count(nz)], 1e-10).unwrap()
    }

    #[test]
    fn edges_are_circles_through_nodes() {
        let e = edge_lengths(&uniform(2, 1, 1)).unwrap();
        let expect = [0.25, 0.75, 0.25, 0.75].map(|r| 2.0 * PI * r);
        assert_eq!(e.len(), 4);
        for (a, b) in e.iter().zip(expect) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn areas_walls_then_rings() {
        let a = face_areas(&uniform(2, 1, 2)).unwrap();
        assert_eq!(a.len(), 4 + 6);
        let expect = [0.25, 0.75, 0.25, 0.75, 0.0625, 0.5, 0.0625, 0.5, 0.0625, 0.5];
        for (got, want) in a.iter().zip(expect) {
            assert!((got - PI * want).abs() < 1e-12);
        }
    }

    #[test]
    fn volumes_fill_cylinder() {
        let w = AxisWidths::from_specs(
            &[
                AxisSpec::Widths(vec![1.0, 2.0, 0.5]),
                AxisSpec::Count(1),
                AxisSpec::Widths(vec![3.0, 1.0]),
            ],
            1e-10,
        )
        .unwrap();
        let total: f64 = cell_volumes(&w).unwrap().iter().sum();
        let r_outer = vector_nx(&w).last().copied().unwrap();
        assert!((total - PI * r_outer * r_outer * 4.0).abs() < 1e-9);
    }

    #[test]
    fn three_dimensional_is_rejected() {
        let w = uniform(2, 4, 2);
        for err in [
            edge_lengths(&w).unwrap_err(),
            face_areas(&w).unwrap_err(),
            cell_volumes(&w).unwrap_err(),
        ] {
            assert!(matches!(
                err,
                CylMeshError::NotImplementedGeometry { n_theta: 4, .. }
            ));
        }
    }
}
