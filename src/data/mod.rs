//! Data module: axis widths and cell properties
#![warn(missing_docs)]

pub mod axis;
pub mod property;

pub use axis::{AxisSpec, AxisWidths};
pub use property::MaterialProperty;
