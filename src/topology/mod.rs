//! Top-level module for mesh topology.
//!
//! Entity counts of the cylindrical tensor mesh and the closed sets of entity
//! locations accepted by the mesh accessors.

pub mod counts;
pub mod location;

pub use counts::TopologyCounts;
pub use location::{GridLocation, MassLocation};
