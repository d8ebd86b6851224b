mod util;

use cyl_mesh::prelude::*;
use util::uniform;

// One radial cell, four layers: nodes at r = 0.5, z = 0, 0.25, 0.5, 0.75, 1.
#[test]
fn nearest_node() {
    let mesh = uniform(1, 1, 4);
    assert_eq!(mesh.nearest([0.5, 0.3], GridLocation::Edges).unwrap(), 1);
    assert_eq!(mesh.nearest([0.0, 0.9], GridLocation::Edges).unwrap(), 4);
    assert_eq!(mesh.nearest([10.0, -5.0], GridLocation::Edges).unwrap(), 0);
}

#[test]
fn ties_resolve_to_lowest_index() {
    let mesh = uniform(1, 1, 4);
    assert_eq!(mesh.nearest([0.5, 0.125], GridLocation::Edges).unwrap(), 0);
    assert_eq!(mesh.nearest([0.5, 0.625], GridLocation::Edges).unwrap(), 2);
}

#[test]
fn nearest_faces() {
    let mesh = uniform(1, 1, 4);
    // Vertical faces sit on the axis, radial faces at r = 0.5 and layer centres.
    assert_eq!(mesh.nearest([0.4, 0.9], GridLocation::VerticalFaces).unwrap(), 4);
    assert_eq!(mesh.nearest([0.0, 0.4], GridLocation::RadialFaces).unwrap(), 1);

    let mesh = uniform(4, 1, 2);
    // Vertical face (column 2, level 1).
    assert_eq!(mesh.nearest([0.52, 0.48], GridLocation::VerticalFaces).unwrap(), 6);
}

#[test]
fn location_strings() {
    let mesh = uniform(1, 1, 4);
    let loc: GridLocation = "fz".parse().unwrap();
    assert_eq!(mesh.nearest([0.0, 0.26], loc).unwrap(), 1);
    assert_eq!(
        "cc".parse::<GridLocation>().unwrap_err(),
        CylMeshError::InvalidLocationType("cc".into())
    );
}

#[test]
fn three_dimensional_mesh_has_no_nearest() {
    let mesh = uniform(2, 4, 2);
    assert!(matches!(
        mesh.nearest([0.1, 0.1], GridLocation::Edges),
        Err(CylMeshError::NotImplementedGeometry { .. })
    ));
}
