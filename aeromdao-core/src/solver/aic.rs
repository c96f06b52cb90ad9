//! Influence-matrix assembly and the boundary-condition right-hand side
//! (spec.md §4.F).

use aeromath::spatial_vector::SpatialVector;
use aeromath::{Matrix, Float};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::vortex::Horseshoe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The only mirror plane spec.md §4.F calls for: a left/right-symmetric
/// aircraft in symmetric flow, mirrored about the `y = 0` plane.
pub enum SymmetryCondition {
    None,
    Y,
}

impl Default for SymmetryCondition {
    fn default() -> Self {
        SymmetryCondition::None
    }
}

impl SymmetryCondition {
    fn mirror(&self, point: SpatialVector) -> Option<SpatialVector> {
        match self {
            SymmetryCondition::None => None,
            SymmetryCondition::Y => Some(SpatialVector::new(point.x, -point.y, point.z)),
        }
    }
}

/// Unit-strength induced velocity at `collocation` from horseshoe `j`,
/// including the mirrored-image contribution when `symmetry` is enabled.
fn influence_velocity(
    horseshoe: &Horseshoe,
    collocation: SpatialVector,
    trailing_direction: SpatialVector,
    symmetry: SymmetryCondition,
) -> SpatialVector {
    let direct = horseshoe.induced_velocity_unit_strength(collocation, trailing_direction);

    match symmetry.mirror(collocation) {
        None => direct,
        Some(mirrored_point) => {
            let mirrored = horseshoe.induced_velocity_unit_strength(mirrored_point, trailing_direction);
            direct + SpatialVector::new(mirrored.x, -mirrored.y, mirrored.z)
        }
    }
}

/// Builds the `M x M` aerodynamic influence coefficient matrix:
/// `A[i, j] = v_ij . n_i`, where `v_ij` is the unit-strength velocity
/// induced at collocation point `i` by horseshoe `j`, trailing in the
/// direction `-U_hat`. Parallelized over collocation points `i` when the
/// `parallel` feature is enabled (spec.md §5).
pub fn build_aic(
    horseshoes: &[Horseshoe],
    collocation: &[SpatialVector],
    normals: &[SpatialVector],
    trailing_direction: SpatialVector,
    symmetry: SymmetryCondition,
) -> Matrix<Float> {
    let m = collocation.len();
    let mut aic = Matrix::new_default([m, m]);

    let rows: Vec<Vec<Float>> = {
        let compute_row = |i: usize| -> Vec<Float> {
            horseshoes
                .iter()
                .map(|horseshoe| {
                    influence_velocity(horseshoe, collocation[i], trailing_direction, symmetry)
                        .dot(normals[i])
                })
                .collect()
        };

        #[cfg(feature = "parallel")]
        {
            (0..m).into_par_iter().map(compute_row).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..m).map(compute_row).collect()
        }
    };

    for (i, row) in rows.into_iter().enumerate() {
        for (j, value) in row.into_iter().enumerate() {
            aic[[i, j]] = value;
        }
    }

    aic
}

/// Builds the boundary-condition right-hand side:
/// `b_i = -(U + Omega x c_i) . n_i` (spec.md §4.F).
pub fn build_rhs(
    freestream_velocity: SpatialVector,
    omega: SpatialVector,
    collocation: &[SpatialVector],
    normals: &[SpatialVector],
) -> Vec<Float> {
    collocation
        .iter()
        .zip(normals.iter())
        .map(|(&c, &n)| -(freestream_velocity + omega.cross(c)).dot(n))
        .collect()
}

/// Solves `aic . gamma = rhs` for the panel circulations via dense LU
/// factorization with partial pivoting, translating a singular pivot into
/// [`Error::SingularSystem`].
pub fn solve_circulations(aic: &Matrix<Float>, rhs: &[Float]) -> Result<Vec<Float>, Error> {
    Ok(aic.solve(rhs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vortex::Line;

    #[test]
    fn rhs_is_zero_when_normal_is_perpendicular_to_flow() {
        let collocation = vec![SpatialVector::new(0.0, 0.0, 0.0)];
        let normals = vec![SpatialVector::new(0.0, 0.0, 1.0)];
        let freestream = SpatialVector::new(10.0, 0.0, 0.0);

        let rhs = build_rhs(freestream, SpatialVector::default(), &collocation, &normals);

        assert!((rhs[0] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn symmetry_doubles_the_self_influence_of_a_panel_on_the_mirror_plane() {
        let bound = Line::new(SpatialVector::new(0.0, -0.5, 0.0), SpatialVector::new(0.0, 0.5, 0.0));
        let horseshoe = Horseshoe::new(bound);
        let trailing_direction = SpatialVector::new(-1.0, 0.0, 0.0);
        let collocation = vec![SpatialVector::new(0.0, 0.0, 0.0)];
        let normals = vec![SpatialVector::new(0.0, 0.0, 1.0)];

        let no_symmetry = build_aic(
            &[horseshoe],
            &collocation,
            &normals,
            trailing_direction,
            SymmetryCondition::None,
        );
        let symmetric = build_aic(
            &[horseshoe],
            &collocation,
            &normals,
            trailing_direction,
            SymmetryCondition::Y,
        );

        // The collocation point sits on the mirror plane, so its image
        // coincides with itself: symmetry exactly doubles the influence.
        assert!((symmetric[[0, 0]] - 2.0 * no_symmetry[[0, 0]]).abs() < 1e-10);
    }
}
