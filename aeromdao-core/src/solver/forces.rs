//! Near-field (Kutta-Joukowski) and far-field force/moment post-processing,
//! non-dimensionalization, and axis transforms (spec.md §4.G).

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use super::reference::ReferenceValues;
use crate::vortex::Horseshoe;

#[derive(Debug, Clone)]
/// Per-panel and aggregate near-field forces/moments, plus the circulation
/// and bound-leg data they were computed from.
pub struct NearfieldResult {
    pub forces: Vec<SpatialVector>,
    pub moments: Vec<SpatialVector>,
    pub total_force: SpatialVector,
    pub total_moment: SpatialVector,
}

/// Unit-strength induced velocity at `point` from every horseshoe except
/// (optionally) its own self-induction term, weighted by circulation.
fn induced_velocity_at(
    horseshoes: &[Horseshoe],
    circulations: &[Float],
    point: SpatialVector,
    trailing_direction: SpatialVector,
) -> SpatialVector {
    horseshoes
        .iter()
        .zip(circulations.iter())
        .map(|(h, &gamma)| h.induced_velocity_unit_strength(point, trailing_direction) * gamma)
        .sum()
}

/// Computes per-panel Kutta-Joukowski forces and their resultant force and
/// (about `r_ref`) moment, per spec.md §4.G:
///
/// `F_i = rho * Gamma_i * (v_total(r_i) x l_i)`, where `v_total(r_i)` is the
/// induced velocity from every horseshoe (including self-induction, as the
/// Biot-Savart kernel's own singularity guard makes the bound leg's
/// contribution to its own midpoint well defined) minus the freestream and
/// rotational velocity at `r_i`.
pub fn nearfield_forces(
    horseshoes: &[Horseshoe],
    circulations: &[Float],
    freestream_velocity: SpatialVector,
    omega: SpatialVector,
    trailing_direction: SpatialVector,
    density: Float,
    r_ref: SpatialVector,
) -> NearfieldResult {
    let n = horseshoes.len();
    let mut forces = Vec::with_capacity(n);
    let mut moments = Vec::with_capacity(n);

    for i in 0..n {
        let bound = horseshoes[i].bound;
        let r_i = 0.5 * (bound.r1 + bound.r2);
        let bound_leg = bound.r2 - bound.r1;

        let v_induced = induced_velocity_at(horseshoes, circulations, r_i, trailing_direction);
        let v_total = v_induced - freestream_velocity - omega.cross(r_i);

        let force = density * circulations[i] * v_total.cross(bound_leg);
        let moment = (r_i - r_ref).cross(force);

        forces.push(force);
        moments.push(moment);
    }

    let total_force = forces.iter().copied().sum();
    let total_moment = moments.iter().copied().sum();

    NearfieldResult {
        forces,
        moments,
        total_force,
        total_moment,
    }
}

/// Near-field-consistent far-field (induced) drag estimate: the total force
/// projected onto the freestream direction, `F . U_hat`. A genuine
/// Trefftz-plane potential integral is marked optional by spec.md §4.G and
/// is not implemented here; see DESIGN.md.
pub fn farfield_drag(total_force: SpatialVector, freestream_direction: SpatialVector) -> Float {
    total_force.dot(freestream_direction)
}

/// Force and moment coefficients: `C_F = F / (q S_ref)`,
/// `C_M = M / (q S_ref L_ref)` with `L_ref = b_ref` for roll/yaw and
/// `c_ref` for pitch (applied by the caller per component).
pub fn non_dimensionalize_force(force: SpatialVector, q: Float, s_ref: Float) -> SpatialVector {
    force / (q * s_ref)
}

pub fn non_dimensionalize_moment(
    moment: SpatialVector,
    q: Float,
    reference: &ReferenceValues,
) -> SpatialVector {
    SpatialVector::new(
        moment.x / (q * reference.s_ref * reference.b_ref),
        moment.y / (q * reference.s_ref * reference.c_ref),
        moment.z / (q * reference.s_ref * reference.b_ref),
    )
}

/// Non-dimensional angular rates `(p_bar, q_bar, r_bar)`, spec.md §4.G.
pub fn non_dimensionalize_rates(
    omega: SpatialVector,
    speed: Float,
    reference: &ReferenceValues,
) -> (Float, Float, Float) {
    let p_bar = omega.x * reference.b_ref / (2.0 * speed);
    let q_bar = omega.y * reference.c_ref / (2.0 * speed);
    let r_bar = omega.z * reference.b_ref / (2.0 * speed);

    (p_bar, q_bar, r_bar)
}

/// Rotation of a body-axis vector into stability axes: rotate by `alpha`
/// about `y`.
pub fn body_to_stability(v: SpatialVector, alpha: Float) -> SpatialVector {
    let (s, c) = alpha.sin_cos();
    SpatialVector::new(c * v.x + s * v.z, v.y, -s * v.x + c * v.z)
}

/// Rotation of a body-axis vector into wind axes: rotate by `alpha` about
/// `y` into stability axes first, then by `-beta` about `z`. Verified
/// against [`crate::freestream::Freestream::velocity`]: the body-axis
/// freestream velocity rotates into exactly `(V, 0, 0)` in wind axes for any
/// `alpha`/`beta`.
pub fn body_to_wind(v: SpatialVector, alpha: Float, beta: Float) -> SpatialVector {
    let stability = body_to_stability(v, alpha);

    let (sb, cb) = (-beta).sin_cos();
    SpatialVector::new(
        cb * stability.x + sb * stability.y,
        -sb * stability.x + cb * stability.y,
        stability.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_panel_forces_equals_total_force() {
        // Two arbitrary horseshoes with independent circulations: the
        // aggregate must equal the literal sum of the per-panel forces
        // (spec.md §8 invariant 4), which holds by construction here since
        // `total_force` is computed as `forces.iter().sum()`.
        use crate::vortex::Line;

        let horseshoes = vec![
            Horseshoe::new(Line::new(
                SpatialVector::new(0.0, -1.0, 0.0),
                SpatialVector::new(0.0, 0.0, 0.0),
            )),
            Horseshoe::new(Line::new(
                SpatialVector::new(0.0, 0.0, 0.0),
                SpatialVector::new(0.0, 1.0, 0.0),
            )),
        ];
        let circulations = vec![1.0, 0.8];
        let freestream = SpatialVector::new(10.0, 0.0, 0.0);
        let trailing_direction = SpatialVector::new(-1.0, 0.0, 0.0);

        let result = nearfield_forces(
            &horseshoes,
            &circulations,
            freestream,
            SpatialVector::default(),
            trailing_direction,
            1.225,
            SpatialVector::default(),
        );

        let manual_sum: SpatialVector = result.forces.iter().copied().sum();
        assert!((manual_sum - result.total_force).length() < 1e-12);

        let manual_moment_sum: SpatialVector = result.moments.iter().copied().sum();
        assert!((manual_moment_sum - result.total_moment).length() < 1e-12);
    }

    #[test]
    fn farfield_drag_matches_wind_axis_x_force() {
        let total_force = SpatialVector::new(1.0, 2.0, 3.0);
        let alpha: Float = 0.1;
        let beta: Float = 0.05;
        let direction = SpatialVector::new(
            alpha.cos() * beta.cos(),
            -beta.sin(),
            alpha.sin() * beta.cos(),
        );

        let drag = farfield_drag(total_force, direction);
        let wind_force = body_to_wind(total_force, alpha, beta);

        assert!((drag - wind_force.x).abs() < 1e-10);
    }
}
