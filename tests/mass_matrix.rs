mod util;

use cyl_mesh::algs::sparse::mat_vec;
use cyl_mesh::prelude::*;
use util::{assert_dense_close, dense, diagonal, uniform};

#[test]
fn missing_property_means_unit_property() {
    let mesh = uniform(3, 1, 2);
    for loc in [MassLocation::Edges, MassLocation::Faces] {
        let a = mesh.mass_matrix(None, loc).unwrap();
        let b = mesh.mass_matrix(Some(&MaterialProperty::Uniform(1.0)), loc).unwrap();
        assert_dense_close(&dense(&a), &dense(&b), 0.0);
    }
}

#[test]
fn diagonal_sums_match_volume() {
    let mesh = uniform(3, 1, 4);
    let total: f64 = mesh.cell_volumes().unwrap().iter().sum();

    let me = mesh.edge_mass(None).unwrap();
    assert_eq!(me.nrows(), mesh.counts().n_n());
    let se: f64 = diagonal(&me).iter().sum();
    assert!((se - total).abs() < 1e-12);

    let mf = mesh.face_mass(None).unwrap();
    assert_eq!(mf.nrows(), mesh.counts().n_f());
    let sf: f64 = diagonal(&mf).iter().sum();
    assert!((sf - 2.0 * total).abs() < 1e-12);
}

#[test]
fn mass_scales_with_property() {
    let mesh = uniform(2, 1, 2);
    let one = diagonal(&mesh.edge_mass(None).unwrap());
    let three = diagonal(&mesh.edge_mass(Some(&3.0.into())).unwrap());
    for (a, b) in one.iter().zip(&three) {
        assert!((3.0 * a - b).abs() < 1e-12);
    }
}

#[test]
fn per_layer_property_broadcasts_over_radius() {
    let mesh = uniform(3, 1, 2);
    let layered = MaterialProperty::PerLayer(vec![2.0, 5.0]);
    let cellwise = MaterialProperty::PerCell(vec![2.0, 2.0, 2.0, 5.0, 5.0, 5.0]);
    let a = mesh.face_mass(Some(&layered)).unwrap();
    let b = mesh.face_mass(Some(&cellwise)).unwrap();
    assert_dense_close(&dense(&a), &dense(&b), 0.0);
}

#[test]
fn wrong_property_length_is_rejected() {
    let mesh = uniform(3, 1, 2);
    let err = mesh
        .edge_mass(Some(&MaterialProperty::PerCell(vec![1.0; 5])))
        .unwrap_err();
    assert_eq!(err, CylMeshError::InvalidPropertyShape { expected: 6, found: 5 });

    let err = mesh
        .face_mass(Some(&MaterialProperty::PerLayer(vec![1.0; 3])))
        .unwrap_err();
    assert_eq!(err, CylMeshError::InvalidPropertyShape { expected: 2, found: 3 });
}

#[test]
fn derivative_applied_to_property_gives_diagonal() {
    let mesh = uniform(3, 1, 2);
    let sigma = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let prop = MaterialProperty::PerCell(sigma.clone());

    let de = mesh.edge_mass_deriv().unwrap();
    assert_eq!((de.nrows(), de.ncols()), (mesh.counts().n_e(), mesh.counts().n_c()));
    let want = diagonal(&mesh.edge_mass(Some(&prop)).unwrap());
    for (a, b) in mat_vec(&de, &sigma).iter().zip(&want) {
        assert!((a - b).abs() < 1e-12);
    }

    let df = mesh.face_mass_deriv().unwrap();
    let want = diagonal(&mesh.face_mass(Some(&prop)).unwrap());
    for (a, b) in mat_vec(&df, &sigma).iter().zip(&want) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn mass_location_strings() {
    assert_eq!("e".parse::<MassLocation>().unwrap(), MassLocation::Edges);
    assert_eq!("f".parse::<MassLocation>().unwrap(), MassLocation::Faces);
    assert_eq!(
        "cc".parse::<MassLocation>().unwrap_err(),
        CylMeshError::InvalidLocationType("cc".into())
    );
}
