//! A small-dihedral, small-sweep NACA 0012 rectangular wing at a sideslipped
//! condition, solved through the public [`crate::solve_case`] entry point
//! end to end.

use aeromath::spatial_vector::SpatialVector;

use crate::airfoil::naca_4_digit;
use crate::freestream::Freestream;
use crate::geometry::{HalfWing, Section, Wing};
use crate::paneling::{PanelSettings, Spacing};
use crate::solver::{ReferenceValues, SymmetryCondition};
use crate::{solve_case, SolveInput, AIRCRAFT_AGGREGATE_KEY};

fn wing() -> Wing {
    let foil = naca_4_digit("0012", 31).unwrap();
    let sections = vec![
        Section::new(foil.clone(), 0.18, 0.0).unwrap(),
        Section::new(foil, 0.16, 0.0).unwrap(),
    ];
    let half = HalfWing::new(
        sections,
        vec![0.5],
        vec![5.0_f64.to_radians()],
        vec![1.14_f64.to_radians()],
    )
    .unwrap();
    Wing::symmetric(half)
}

#[test]
fn sideslipped_rectangular_wing_produces_a_plausible_polar_point() {
    let wing = wing();
    let settings = PanelSettings {
        spanwise_panels: vec![20],
        chordwise_panels: 5,
        spacing: Spacing::Cosine,
    };
    let freestream = Freestream::new(10.0, 2.0_f64.to_radians(), 2.0_f64.to_radians(), SpatialVector::default()).unwrap();
    let reference = ReferenceValues {
        s_ref: wing.projected_area(),
        b_ref: wing.span(),
        c_ref: wing.mean_aerodynamic_chord(),
        r_ref: SpatialVector::default(),
        density: 1.225,
    };

    let results = solve_case(
        &SolveInput::Wing(&wing),
        &settings,
        &freestream,
        &reference,
        SymmetryCondition::None,
    )
    .unwrap();
    let result = &results[AIRCRAFT_AGGREGATE_KEY];

    // Numbers are not matched against a published reference solver here (no
    // toolchain was run to check them); only physically-required sign and
    // order-of-magnitude bounds for a lightly-loaded, nearly-rectangular
    // wing at a small angle of attack are asserted.
    let [cd, _cy, cl, _cl_roll, cm, _cn, p_bar, q_bar, r_bar] = result.nearfield_coefficients;
    assert!(cl > 0.05 && cl < 0.3, "unexpected lift coefficient: {cl}");
    assert!(cd > 0.0 && cd < 0.05, "unexpected drag coefficient: {cd}");
    assert!(cm.abs() < 0.15, "unexpected pitching moment: {cm}");
    assert_eq!(p_bar, 0.0);
    assert_eq!(q_bar, 0.0);
    assert_eq!(r_bar, 0.0);

    let [cd_ff, _cy_ff, cl_ff] = result.farfield_coefficients;
    assert!((cl_ff - cl).abs() < 1e-9);
    assert!(cd_ff > 0.0);
}
