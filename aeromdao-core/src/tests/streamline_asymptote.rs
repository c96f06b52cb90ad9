//! A streamline seeded downstream of a planar wing should asymptote
//! parallel to the freestream: far enough behind the bound vortices, their
//! induced velocity decays and the local flow direction converges to the
//! freestream direction.

use aeromath::spatial_vector::SpatialVector;

use crate::airfoil::naca_4_digit;
use crate::freestream::Freestream;
use crate::geometry::{HalfWing, Section, Wing};
use crate::paneling::{PanelSettings, Spacing};
use crate::solver::{ReferenceValues, SymmetryCondition};
use crate::{solve_case, streamlines, SolveInput, AIRCRAFT_AGGREGATE_KEY};

#[test]
fn streamline_behind_a_planar_wing_asymptotes_to_the_freestream_direction() {
    let foil = naca_4_digit("0012", 21).unwrap();
    let sections = vec![
        Section::new(foil.clone(), 1.0, 0.0).unwrap(),
        Section::new(foil, 1.0, 0.0).unwrap(),
    ];
    let half = HalfWing::new(sections, vec![2.5], vec![0.0], vec![0.0]).unwrap();
    let wing = Wing::symmetric(half);

    let settings = PanelSettings {
        spanwise_panels: vec![8],
        chordwise_panels: 4,
        spacing: Spacing::Cosine,
    };
    let freestream = Freestream::new(10.0, 4.0_f64.to_radians(), 0.0, SpatialVector::default()).unwrap();
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

    let b_total = wing.span();
    let seed = SpatialVector::new(b_total, 0.3 * b_total, 0.0);
    let traces = streamlines(
        &[seed],
        result,
        freestream.velocity(),
        freestream.omega,
        -freestream.direction(),
        8.0 * b_total,
        200,
    );

    let trace = &traces[0];
    let last = *trace.last().unwrap();
    let second_to_last = trace[trace.len() - 2];
    let local_direction = (last - second_to_last).normalize();

    let freestream_direction = freestream.direction();
    let relative_error = (local_direction - freestream_direction).length();
    assert!(
        relative_error < 1e-3,
        "streamline direction {:?} did not converge to freestream direction {:?} (error {})",
        local_direction,
        freestream_direction,
        relative_error
    );
}
