//! A left/right-symmetric wing-plus-tail aircraft in symmetric flow must
//! produce zero lateral coefficients, both for each component solved in
//! isolation and for the fully-coupled aggregate.

use aeromath::spatial_vector::SpatialVector;

use crate::airfoil::naca_4_digit;
use crate::freestream::Freestream;
use crate::geometry::{Aircraft, HalfWing, Section, Wing};
use crate::paneling::{PanelSettings, Spacing, Transform};
use crate::solver::{ReferenceValues, SymmetryCondition};
use crate::{solve_case, SolveInput, AIRCRAFT_AGGREGATE_KEY};

fn rectangular_wing(span: f64, chord: f64) -> Wing {
    let foil = naca_4_digit("0012", 21).unwrap();
    let sections = vec![
        Section::new(foil.clone(), chord, 0.0).unwrap(),
        Section::new(foil, chord, 0.0).unwrap(),
    ];
    let half = HalfWing::new(sections, vec![span / 2.0], vec![0.0], vec![0.0]).unwrap();
    Wing::symmetric(half)
}

#[test]
fn symmetric_aircraft_in_symmetric_flow_has_zero_lateral_coefficients() {
    let main_wing = rectangular_wing(5.0, 1.0);
    let horizontal_tail = rectangular_wing(2.0, 0.4);

    let aircraft = Aircraft::new()
        .with_component("MainWing", main_wing.clone(), Transform::identity())
        .with_component(
            "HorizontalTail",
            horizontal_tail,
            Transform::new(SpatialVector::new(4.0, 0.0, 0.2), SpatialVector::unit_z(), 0.0),
        );

    let settings = PanelSettings {
        spanwise_panels: vec![8],
        chordwise_panels: 4,
        spacing: Spacing::Cosine,
    };
    let freestream = Freestream::new(15.0, 3.0_f64.to_radians(), 0.0, SpatialVector::default()).unwrap();
    let reference = ReferenceValues {
        s_ref: main_wing.projected_area(),
        b_ref: main_wing.span(),
        c_ref: main_wing.mean_aerodynamic_chord(),
        r_ref: SpatialVector::default(),
        density: 1.225,
    };

    let results = solve_case(
        &SolveInput::Aircraft(&aircraft),
        &settings,
        &freestream,
        &reference,
        SymmetryCondition::None,
    )
    .unwrap();

    for key in ["MainWing", "HorizontalTail", AIRCRAFT_AGGREGATE_KEY] {
        let coeffs = results[key].nearfield_coefficients;
        let (cy, cl_roll, cn) = (coeffs[1], coeffs[3], coeffs[5]);
        assert!(cy.abs() < 1e-10, "{key}: CY = {cy}");
        assert!(cl_roll.abs() < 1e-10, "{key}: Cl = {cl_roll}");
        assert!(cn.abs() < 1e-10, "{key}: Cn = {cn}");
    }
}
