//! Steady, incompressible, inviscid potential-flow aerodynamics: a 2D
//! constant-strength doublet-source panel method for airfoils, and a 3D
//! vortex-lattice method for lifting surfaces (wings, tails, full aircraft
//! assemblies).

pub mod airfoil;
pub mod error;
pub mod freestream;
pub mod geometry;
pub mod panel2d;
pub mod paneling;
pub mod solver;
pub mod streamlines;
pub mod vortex;

pub use error::Error;

use std::collections::HashMap;

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use freestream::Freestream;
use geometry::{Aircraft, Wing};
use paneling::{mesh_wing, PanelSettings};
use solver::stability::{stability_derivatives, Perturbation, StabilityResult};
use solver::{solve_panels, ReferenceValues, SolveResult, SymmetryCondition};

/// The geometry argument to [`solve_case`]/[`solve_stability_case`]: either a
/// bare [`Wing`] or a full [`Aircraft`] assembly (spec.md §6/§11).
pub enum SolveInput<'a> {
    Wing(&'a Wing),
    Aircraft(&'a Aircraft),
}

/// Key used for a bare [`Wing`] input, and for the combined, fully-coupled
/// aggregate entry of an [`Aircraft`] input.
pub const AIRCRAFT_AGGREGATE_KEY: &str = "Aircraft";

/// Meshes `wing` and applies `transform` to both the bound and camber
/// meshes, used to place a named aircraft component in the aircraft's
/// reference frame before assembly.
fn mesh_and_place(
    wing: &Wing,
    settings: &PanelSettings,
    transform: &paneling::Transform,
) -> (Vec<paneling::Panel3D>, Vec<paneling::Panel3D>) {
    let (bound, camber) = mesh_wing(wing, settings);
    (transform.apply(&bound), transform.apply(&camber))
}

/// Runs `solve_case` (spec.md §6/§11): for a bare [`Wing`] this is a single
/// solve keyed [`AIRCRAFT_AGGREGATE_KEY`]. For an [`Aircraft`], each named
/// component is solved in isolation (no inter-component interference) for
/// its own entry, plus one combined solve over every component's meshes
/// (placed by its [`paneling::Transform`]) for the fully-coupled
/// [`AIRCRAFT_AGGREGATE_KEY`] entry.
pub fn solve_case(
    input: &SolveInput,
    settings: &PanelSettings,
    freestream: &Freestream,
    reference: &ReferenceValues,
    symmetry: SymmetryCondition,
) -> Result<HashMap<String, SolveResult>, Error> {
    let mut results = HashMap::new();

    match input {
        SolveInput::Wing(wing) => {
            let (bound, camber) = mesh_wing(wing, settings);
            let result = solve_panels(&bound, &camber, freestream, reference, symmetry)?;
            results.insert(AIRCRAFT_AGGREGATE_KEY.to_string(), result);
        }
        SolveInput::Aircraft(aircraft) => {
            let mut combined_bound = Vec::new();
            let mut combined_camber = Vec::new();

            for component in &aircraft.components {
                let (bound, camber) = mesh_and_place(&component.wing, settings, &component.transform);

                let result = solve_panels(&bound, &camber, freestream, reference, symmetry)?;
                results.insert(component.name.clone(), result);

                combined_bound.extend(bound);
                combined_camber.extend(camber);
            }

            let aggregate = solve_panels(&combined_bound, &combined_camber, freestream, reference, symmetry)?;
            results.insert(AIRCRAFT_AGGREGATE_KEY.to_string(), aggregate);
        }
    }

    Ok(results)
}

/// Runs the stability-derivative sweep (spec.md §4.H/§6) over the same
/// geometry `solve_case` would mesh, keyed the same way.
pub fn solve_stability_case(
    input: &SolveInput,
    settings: &PanelSettings,
    base_freestream: &Freestream,
    reference: &ReferenceValues,
    symmetry: SymmetryCondition,
    perturbation: Perturbation,
) -> Result<HashMap<String, StabilityResult>, Error> {
    let mut results = HashMap::new();

    match input {
        SolveInput::Wing(wing) => {
            let (bound, camber) = mesh_wing(wing, settings);
            let result = stability_derivatives(&bound, &camber, base_freestream, reference, symmetry, perturbation)?;
            results.insert(AIRCRAFT_AGGREGATE_KEY.to_string(), result);
        }
        SolveInput::Aircraft(aircraft) => {
            let mut combined_bound = Vec::new();
            let mut combined_camber = Vec::new();

            for component in &aircraft.components {
                let (bound, camber) = mesh_and_place(&component.wing, settings, &component.transform);

                let result = stability_derivatives(&bound, &camber, base_freestream, reference, symmetry, perturbation)?;
                results.insert(component.name.clone(), result);

                combined_bound.extend(bound);
                combined_camber.extend(camber);
            }

            let aggregate = stability_derivatives(
                &combined_bound,
                &combined_camber,
                base_freestream,
                reference,
                symmetry,
                perturbation,
            )?;
            results.insert(AIRCRAFT_AGGREGATE_KEY.to_string(), aggregate);
        }
    }

    Ok(results)
}

/// Traces a streamline from every seed point through a solved flow field
/// (spec.md §4.I/§6).
pub fn streamlines(
    seeds: &[SpatialVector],
    result: &SolveResult,
    freestream_velocity: SpatialVector,
    omega: SpatialVector,
    trailing_direction: SpatialVector,
    length: Float,
    num_steps: usize,
) -> Vec<Vec<SpatialVector>> {
    seeds
        .iter()
        .map(|&seed| {
            streamlines::trace(
                seed,
                freestream_velocity,
                omega,
                &result.horseshoes,
                &result.circulations,
                trailing_direction,
                length,
                num_steps,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests;
