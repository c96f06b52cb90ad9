//! Forward-Euler streamline tracing through a solved horseshoe-vortex field
//! (spec.md §4.I).

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use crate::vortex::Horseshoe;

/// Total induced velocity at `point`: the freestream, the rigid-body
/// rotational velocity `Omega x point`, and the sum of every horseshoe's
/// induced velocity weighted by its solved circulation.
fn total_velocity(
    point: SpatialVector,
    freestream: SpatialVector,
    omega: SpatialVector,
    horseshoes: &[Horseshoe],
    circulations: &[Float],
    trailing_direction: SpatialVector,
) -> SpatialVector {
    let induced: SpatialVector = horseshoes
        .iter()
        .zip(circulations.iter())
        .map(|(h, &gamma)| h.induced_velocity_unit_strength(point, trailing_direction) * gamma)
        .sum();

    freestream + omega.cross(point) + induced
}

/// Traces a streamline from `seed` through the solved flow field by
/// forward-Euler integration, per spec.md §4.I: each step advances by
/// `step = length / num_steps` along the locally induced velocity's unit
/// direction, with no collision detection against panel surfaces. Returns
/// `num_steps + 1` points, the first being `seed` itself.
pub fn trace(
    seed: SpatialVector,
    freestream: SpatialVector,
    omega: SpatialVector,
    horseshoes: &[Horseshoe],
    circulations: &[Float],
    trailing_direction: SpatialVector,
    length: Float,
    num_steps: usize,
) -> Vec<SpatialVector> {
    let step = length / (num_steps as Float);
    let mut points = Vec::with_capacity(num_steps + 1);
    let mut point = seed;
    points.push(point);

    for _ in 0..num_steps {
        let velocity = total_velocity(point, freestream, omega, horseshoes, circulations, trailing_direction);
        let direction = velocity.normalize();
        point += direction * step;
        points.push(point);
    }

    points
}
