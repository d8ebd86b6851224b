//! Re-export public algorithms.

pub mod interpolate;
pub mod sparse;
pub mod tensor;

pub use interpolate::{interpolation_matrix, nearest};
