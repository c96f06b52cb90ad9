//! Influence assembly, the linear solve, and near-field/far-field
//! post-processing: the core vortex-lattice pipeline of spec.md §4.F-§4.H.

pub mod aic;
mod forces;
mod reference;
pub mod stability;

pub use aic::SymmetryCondition;
pub use reference::ReferenceValues;
pub use stability::{stability_derivatives, Perturbation, StabilityResult};

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use crate::error::Error;
use crate::freestream::Freestream;
use crate::paneling::Panel3D;
use crate::vortex::Horseshoe;

/// The full per-solve output named in spec.md §6:
/// `{ nf_coeffs[9], ff_coeffs[3], CFs[panel], CMs[panel], horseshoe_panels,
/// camber_normals, horseshoes, Gamma[panel] }`.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// `[CD, CY, CL, Cl, Cm, Cn, p_bar, q_bar, r_bar]`.
    pub nearfield_coefficients: [Float; 9],
    /// `[CD_i, CY, CL]`.
    pub farfield_coefficients: [Float; 3],
    /// Per-panel force coefficients, non-dimensionalized the same way as
    /// the aggregate.
    pub panel_force_coefficients: Vec<SpatialVector>,
    /// Per-panel moment coefficients about the reference point.
    pub panel_moment_coefficients: Vec<SpatialVector>,
    pub horseshoe_panels: Vec<Panel3D>,
    pub camber_normals: Vec<SpatialVector>,
    pub horseshoes: Vec<Horseshoe>,
    pub circulations: Vec<Float>,
}

/// Builds one [`Horseshoe`] per bound-mesh panel, placing the bound leg at
/// the panel quarter-chord (spec.md §4.D), and collects the matching
/// collocation points at the three-quarter-chord.
fn build_horseshoes(bound_mesh: &[Panel3D]) -> (Vec<Horseshoe>, Vec<SpatialVector>) {
    let mut horseshoes = Vec::with_capacity(bound_mesh.len());
    let mut collocation = Vec::with_capacity(bound_mesh.len());

    for panel in bound_mesh {
        let (bound, point) = panel.bound_leg_and_collocation();
        horseshoes.push(Horseshoe::new(bound));
        collocation.push(point);
    }

    (horseshoes, collocation)
}

/// Collects the camber-mesh panel normals used as the boundary-condition
/// normals, per spec.md §4.D ("panel normals computed from the camber
/// mesh").
fn camber_normals(camber_mesh: &[Panel3D]) -> Vec<SpatialVector> {
    camber_mesh.iter().map(|p| p.normal()).collect()
}

/// Runs the full vortex-lattice pipeline on a pre-meshed bound/camber pair:
/// builds horseshoes, assembles the AIC matrix and RHS, solves for
/// circulations, and post-processes near-field and far-field coefficients.
/// This is the shared core both [`crate::solve_case`] and
/// [`stability_derivatives`] call into.
pub fn solve_panels(
    bound_mesh: &[Panel3D],
    camber_mesh: &[Panel3D],
    freestream: &Freestream,
    reference: &ReferenceValues,
    symmetry: SymmetryCondition,
) -> Result<SolveResult, Error> {
    let (horseshoes, collocation) = build_horseshoes(bound_mesh);
    let normals = camber_normals(camber_mesh);

    let freestream_velocity = freestream.velocity();
    let trailing_direction = -freestream.direction();

    let aic_matrix = aic::build_aic(&horseshoes, &collocation, &normals, trailing_direction, symmetry);
    let rhs = aic::build_rhs(freestream_velocity, freestream.omega, &collocation, &normals);
    let circulations = aic::solve_circulations(&aic_matrix, &rhs)?;

    let nearfield = forces::nearfield_forces(
        &horseshoes,
        &circulations,
        freestream_velocity,
        freestream.omega,
        trailing_direction,
        reference.density,
        reference.r_ref,
    );

    let q = reference.dynamic_pressure(freestream.speed);

    let panel_force_coefficients: Vec<SpatialVector> = nearfield
        .forces
        .iter()
        .map(|&f| forces::non_dimensionalize_force(f, q, reference.s_ref))
        .collect();
    let panel_moment_coefficients: Vec<SpatialVector> = nearfield
        .moments
        .iter()
        .map(|&m| forces::non_dimensionalize_moment(m, q, reference))
        .collect();

    let body_cf = forces::non_dimensionalize_force(nearfield.total_force, q, reference.s_ref);
    let body_cm = forces::non_dimensionalize_moment(nearfield.total_moment, q, reference);

    let wind_cf = forces::body_to_wind(body_cf, freestream.alpha, freestream.beta);

    let (p_bar, q_bar, r_bar) =
        forces::non_dimensionalize_rates(freestream.omega, freestream.speed, reference);

    let nearfield_coefficients = [
        wind_cf.x, wind_cf.y, -wind_cf.z, body_cm.x, body_cm.y, body_cm.z, p_bar, q_bar, r_bar,
    ];

    let farfield_drag_force = forces::farfield_drag(nearfield.total_force, freestream.direction());
    let cd_farfield = farfield_drag_force / (q * reference.s_ref);
    let farfield_coefficients = [cd_farfield, wind_cf.y, -wind_cf.z];

    Ok(SolveResult {
        nearfield_coefficients,
        farfield_coefficients,
        panel_force_coefficients,
        panel_moment_coefficients,
        horseshoe_panels: bound_mesh.to_vec(),
        camber_normals: normals,
        horseshoes,
        circulations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca_4_digit;
    use crate::geometry::{HalfWing, Section, Wing};
    use crate::paneling::{mesh_wing, PanelSettings, Spacing};

    fn rectangular_wing() -> Wing {
        let foil = naca_4_digit("0012", 21).unwrap();
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
    fn symmetric_wing_in_symmetric_flow_has_zero_lateral_coefficients() {
        let wing = rectangular_wing();
        let settings = PanelSettings {
            spanwise_panels: vec![10],
            chordwise_panels: 5,
            spacing: Spacing::Cosine,
        };
        let (bound_mesh, camber_mesh) = mesh_wing(&wing, &settings);

        let freestream = Freestream::new(10.0, 2.0_f64.to_radians(), 0.0, SpatialVector::default()).unwrap();
        let reference = ReferenceValues {
            s_ref: wing.projected_area(),
            b_ref: wing.span(),
            c_ref: wing.mean_aerodynamic_chord(),
            r_ref: SpatialVector::default(),
            density: 1.225,
        };

        let result = solve_panels(
            &bound_mesh,
            &camber_mesh,
            &freestream,
            &reference,
            SymmetryCondition::None,
        )
        .unwrap();

        let [_cd, cy, _cl, cl_roll, _cm, cn, ..] = result.nearfield_coefficients;

        assert!(cy.abs() < 1e-10);
        assert!(cl_roll.abs() < 1e-10);
        assert!(cn.abs() < 1e-10);
    }

    #[test]
    fn sum_of_panel_force_coefficients_equals_the_reported_total() {
        let wing = rectangular_wing();
        let settings = PanelSettings {
            spanwise_panels: vec![6],
            chordwise_panels: 4,
            spacing: Spacing::Cosine,
        };
        let (bound_mesh, camber_mesh) = mesh_wing(&wing, &settings);

        let freestream = Freestream::new(10.0, 3.0_f64.to_radians(), 0.0, SpatialVector::default()).unwrap();
        let reference = ReferenceValues {
            s_ref: wing.projected_area(),
            b_ref: wing.span(),
            c_ref: wing.mean_aerodynamic_chord(),
            r_ref: SpatialVector::default(),
            density: 1.225,
        };

        let result = solve_panels(
            &bound_mesh,
            &camber_mesh,
            &freestream,
            &reference,
            SymmetryCondition::None,
        )
        .unwrap();

        let sum: SpatialVector = result.panel_force_coefficients.iter().copied().sum();
        let q = reference.dynamic_pressure(freestream.speed);
        let expected_total = forces::non_dimensionalize_force(
            sum * (q * reference.s_ref),
            q,
            reference.s_ref,
        );

        assert!(sum.length() > 0.0);
        assert!((sum - expected_total).length() < 1e-12);
    }
}
