//! Closed sets of entity locations accepted by the mesh accessors.
//!
//! The short string forms (`"et"`, `"fr"`, `"fz"`, `"e"`, `"f"`) are accepted
//! through [`FromStr`]; anything else is rejected with
//! [`CylMeshError::InvalidLocationType`].

use crate::mesh_error::CylMeshError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity family used for nearest-point lookup and interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridLocation {
    /// Azimuthal edges through each node (θ-component of edge fields).
    Edges,
    /// Faces normal to r.
    RadialFaces,
    /// Faces normal to z.
    VerticalFaces,
}

impl FromStr for GridLocation {
    type Err = CylMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "et" | "e" => Ok(GridLocation::Edges),
            "fr" => Ok(GridLocation::RadialFaces),
            "fz" => Ok(GridLocation::VerticalFaces),
            other => Err(CylMeshError::InvalidLocationType(other.to_string())),
        }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridLocation::Edges => "et",
            GridLocation::RadialFaces => "fr",
            GridLocation::VerticalFaces => "fz",
        })
    }
}

/// Where a mass matrix lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassLocation {
    Edges,
    Faces,
}

impl FromStr for MassLocation {
    type Err = CylMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(MassLocation::Edges),
            "f" => Ok(MassLocation::Faces),
            other => Err(CylMeshError::InvalidLocationType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_forms() {
        assert_eq!("fz".parse::<GridLocation>().unwrap(), GridLocation::VerticalFaces);
        assert_eq!("fr".parse::<GridLocation>().unwrap(), GridLocation::RadialFaces);
        assert_eq!("et".parse::<GridLocation>().unwrap(), GridLocation::Edges);
        assert_eq!("f".parse::<MassLocation>().unwrap(), MassLocation::Faces);
        assert_eq!(GridLocation::VerticalFaces.to_string(), "fz");
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "cc".parse::<GridLocation>().unwrap_err(),
            CylMeshError::InvalidLocationType("cc".into())
        );
        assert!("fz".parse::<MassLocation>().is_err());
    }
}
