//! Node, edge and face counts of a cylindrical tensor mesh.
//!
//! Counts depend only on the number of cells per axis. A mesh with a single
//! azimuthal cell is axisymmetric: it has no distinct θ nodes, and its radial
//! nodes sit at the outer side of each cell instead of on both sides.

use serde::{Deserialize, Serialize};

/// Per-axis and total entity counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyCounts {
    n_cells: [usize; 3],
}

impl TopologyCounts {
    /// Counts for `[nr, nθ, nz]` cells.
    #[inline]
    pub const fn new(n_cells: [usize; 3]) -> Self {
        Self { n_cells }
    }

    /// `true` when the mesh has a single azimuthal cell.
    #[inline]
    pub const fn is_axisymmetric(&self) -> bool {
        self.n_cells[1] == 1
    }

    /// Cells per axis `[nr, nθ, nz]`.
    #[inline]
    pub const fn vn_c(&self) -> [usize; 3] {
        self.n_cells
    }

    #[inline]
    pub const fn n_cx(&self) -> usize {
        self.n_cells[0]
    }

    #[inline]
    pub const fn n_cy(&self) -> usize {
        self.n_cells[1]
    }

    #[inline]
    pub const fn n_cz(&self) -> usize {
        self.n_cells[2]
    }

    /// Total number of cells.
    #[inline]
    pub const fn n_c(&self) -> usize {
        self.n_cells[0] * self.n_cells[1] * self.n_cells[2]
    }

    /// Radial nodes.
    #[inline]
    pub const fn n_nx(&self) -> usize {
        if self.is_axisymmetric() {
            self.n_cells[0]
        } else {
            self.n_cells[0] + 1
        }
    }

    /// Azimuthal nodes (zero for an axisymmetric mesh).
    #[inline]
    pub const fn n_ny(&self) -> usize {
        if self.is_axisymmetric() {
            0
        } else {
            self.n_cells[1]
        }
    }

    /// Vertical nodes.
    #[inline]
    pub const fn n_nz(&self) -> usize {
        self.n_cells[2] + 1
    }

    /// Nodes per axis `[nNx, nNy, nNz]`.
    #[inline]
    pub const fn vn_n(&self) -> [usize; 3] {
        [self.n_nx(), self.n_ny(), self.n_nz()]
    }

    /// Total number of nodes. A collapsed θ axis contributes a factor of one.
    pub fn n_n(&self) -> usize {
        self.vn_n().iter().map(|&n| n.max(1)).product()
    }

    /// Radial faces per axis; one per cell.
    #[inline]
    pub const fn vn_fx(&self) -> [usize; 3] {
        self.n_cells
    }

    /// Azimuthal faces per axis.
    #[inline]
    pub const fn vn_fy(&self) -> [usize; 3] {
        offset(self.n_cells, [0, -1, 0])
    }

    /// Vertical faces per axis.
    #[inline]
    pub const fn vn_fz(&self) -> [usize; 3] {
        offset(self.n_cells, [0, 0, 1])
    }

    /// Radial edges per axis.
    #[inline]
    pub const fn vn_ex(&self) -> [usize; 3] {
        offset(self.n_cells, [0, -1, 1])
    }

    /// Azimuthal edges per axis.
    #[inline]
    pub const fn vn_ey(&self) -> [usize; 3] {
        offset(self.n_cells, [0, 0, 1])
    }

    /// Vertical edges per axis.
    #[inline]
    pub const fn vn_ez(&self) -> [usize; 3] {
        offset(self.n_cells, [0, -1, 0])
    }

    pub fn n_fx(&self) -> usize {
        prod(self.vn_fx())
    }

    pub fn n_fy(&self) -> usize {
        prod(self.vn_fy())
    }

    pub fn n_fz(&self) -> usize {
        prod(self.vn_fz())
    }

    /// Total number of faces, radial then azimuthal then vertical.
    pub fn n_f(&self) -> usize {
        self.n_fx() + self.n_fy() + self.n_fz()
    }

    pub fn n_ex(&self) -> usize {
        prod(self.vn_ex())
    }

    pub fn n_ey(&self) -> usize {
        prod(self.vn_ey())
    }

    pub fn n_ez(&self) -> usize {
        prod(self.vn_ez())
    }

    /// Total number of edges.
    pub fn n_e(&self) -> usize {
        self.n_ex() + self.n_ey() + self.n_ez()
    }
}

const fn offset(n: [usize; 3], delta: [isize; 3]) -> [usize; 3] {
    let mut out = [0usize; 3];
    let mut i = 0;
    while i < 3 {
        let v = n[i] as isize + delta[i];
        out[i] = if v < 0 { 0 } else { v as usize };
        i += 1;
    }
    out
}

fn prod(n: [usize; 3]) -> usize {
    n.iter().product()
}
