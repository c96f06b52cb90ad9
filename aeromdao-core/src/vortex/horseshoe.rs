//! Horseshoe vortex: a bound leg plus two semi-infinite trailing legs
//! aligned with a freestream-derived direction supplied at evaluation time.

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use super::line::Line;

#[derive(Debug, Clone, Copy)]
/// A single bound-leg [`Line`]; the two semi-infinite trailing legs are
/// implicit, aligned with a `trailing_direction` supplied per query (spec.md
/// §3).
pub struct Horseshoe {
    pub bound: Line,
}

impl Horseshoe {
    pub fn new(bound: Line) -> Self {
        Self { bound }
    }

    /// Unit-strength induced velocity at `point`: the bound-leg contribution
    /// plus the two semi-infinite trailing legs running downstream along
    /// `trailing_direction` (a unit vector, typically the negative
    /// freestream direction), per spec.md §4.E.
    pub fn induced_velocity_unit_strength(
        &self,
        point: SpatialVector,
        trailing_direction: SpatialVector,
    ) -> SpatialVector {
        let bound_velocity = self.bound.induced_velocity_unit_strength(point);

        let a = point - self.bound.r1;
        let b = point - self.bound.r2;

        let trailing = trailing_leg_velocity(a, trailing_direction) - trailing_leg_velocity(b, trailing_direction);

        bound_velocity + trailing
    }
}

#[inline(always)]
/// Induced velocity from a single semi-infinite trailing filament running
/// from `r` (the vector from the bound-leg endpoint to the field point)
/// downstream along `d`.
fn trailing_leg_velocity(r: SpatialVector, d: SpatialVector) -> SpatialVector {
    use aeromath::consts::{BIOT_SAVART_EPSILON, PI};

    const FOUR_PI_INVERSE: Float = 1.0 / (4.0 * PI);

    let r_len = r.length();
    let cross = r.cross(d);

    if r_len < BIOT_SAVART_EPSILON || cross.length() < BIOT_SAVART_EPSILON {
        return SpatialVector::default();
    }

    let denominator = r_len * (r_len - r.dot(d));

    cross * (FOUR_PI_INVERSE / denominator)
}
