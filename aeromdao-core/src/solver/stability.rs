//! Stability derivatives: a central-difference sweep over
//! `{alpha, beta, p_bar, q_bar, r_bar}`, re-solving the VLM for each
//! perturbation (spec.md §4.H).

use aeromath::type_aliases::Float;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::freestream::Freestream;
use crate::paneling::Panel3D;
use crate::solver::aic::SymmetryCondition;
use crate::solver::reference::ReferenceValues;
use crate::solver::{solve_panels, SolveResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Perturbation sizes for the stability-derivative sweep. Small enough to
/// stay in the VLM's linear regime (spec.md §4.H).
pub struct Perturbation {
    pub delta_angle: Float,
    pub delta_rate: Float,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            delta_angle: 1.0e-3,
            delta_rate: 1.0e-3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// One of the five variables stability derivatives are swept over.
enum Variable {
    Alpha,
    Beta,
    PBar,
    QBar,
    RBar,
}

const VARIABLES: [Variable; 5] = [
    Variable::Alpha,
    Variable::Beta,
    Variable::PBar,
    Variable::QBar,
    Variable::RBar,
];

/// Applies a signed perturbation of `variable` to `freestream`, returning a
/// perturbed copy.
fn perturb(freestream: &Freestream, variable: Variable, delta: Float, reference: &ReferenceValues) -> Freestream {
    let mut fs = *freestream;

    match variable {
        Variable::Alpha => fs.alpha += delta,
        Variable::Beta => fs.beta += delta,
        Variable::PBar => fs.omega.x += delta * 2.0 * freestream.speed / reference.b_ref,
        Variable::QBar => fs.omega.y += delta * 2.0 * freestream.speed / reference.c_ref,
        Variable::RBar => fs.omega.z += delta * 2.0 * freestream.speed / reference.b_ref,
    }

    fs
}

/// The base 9-vector of near-field coefficients:
/// `[CD, CY, CL, Cl, Cm, Cn, p_bar, q_bar, r_bar]`.
pub type NearfieldCoefficients = [Float; 9];

#[derive(Debug, Clone)]
pub struct StabilityResult {
    pub base_nearfield: NearfieldCoefficients,
    /// `derivatives[row][col]`: row = {CD, CY, CL, Cl, Cm, Cn}, column =
    /// {alpha, beta, p_bar, q_bar, r_bar}.
    pub derivatives: [[Float; 5]; 6],
}

/// Runs the finite-difference stability-derivative sweep described in
/// spec.md §4.H: for each of the five variables, perturb by `+delta`/`-delta`,
/// re-solve the VLM, and approximate the derivative by central differencing.
/// Each of the 10 re-solves is independent and parallelized with `rayon`
/// when the `parallel` feature is enabled (spec.md §5, §8).
pub fn stability_derivatives(
    bound_mesh: &[Panel3D],
    camber_mesh: &[Panel3D],
    base_freestream: &Freestream,
    reference: &ReferenceValues,
    symmetry: SymmetryCondition,
    perturbation: Perturbation,
) -> Result<StabilityResult, Error> {
    let base = solve_panels(bound_mesh, camber_mesh, base_freestream, reference, symmetry)?;
    let base_nearfield = base.nearfield_coefficients;

    let compute_pair = |variable: Variable| -> Result<([Float; 9], [Float; 9]), Error> {
        let delta = match variable {
            Variable::Alpha | Variable::Beta => perturbation.delta_angle,
            Variable::PBar | Variable::QBar | Variable::RBar => perturbation.delta_rate,
        };

        let plus_fs = perturb(base_freestream, variable, delta, reference);
        let minus_fs = perturb(base_freestream, variable, -delta, reference);

        let plus = solve_panels(bound_mesh, camber_mesh, &plus_fs, reference, symmetry)?;
        let minus = solve_panels(bound_mesh, camber_mesh, &minus_fs, reference, symmetry)?;

        Ok((plus.nearfield_coefficients, minus.nearfield_coefficients))
    };

    let pairs: Vec<Result<([Float; 9], [Float; 9]), Error>> = {
        #[cfg(feature = "parallel")]
        {
            VARIABLES.par_iter().map(|&v| compute_pair(v)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            VARIABLES.iter().map(|&v| compute_pair(v)).collect()
        }
    };

    let mut derivatives = [[0.0; 5]; 6];

    for (col, pair) in pairs.into_iter().enumerate() {
        let (plus, minus) = pair?;
        let delta = match VARIABLES[col] {
            Variable::Alpha | Variable::Beta => perturbation.delta_angle,
            Variable::PBar | Variable::QBar | Variable::RBar => perturbation.delta_rate,
        };

        for row in 0..6 {
            derivatives[row][col] = (plus[row] - minus[row]) / (2.0 * delta);
        }
    }

    Ok(StabilityResult {
        base_nearfield,
        derivatives,
    })
}
