//! A straight, unit-strength vortex filament and its Biot-Savart induced
//! velocity.

use aeromath::consts::{BIOT_SAVART_EPSILON, PI};
use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

const FOUR_PI_INVERSE: Float = 1.0 / (4.0 * PI);

#[derive(Debug, Clone, Copy)]
/// A straight vortex filament from `r1` to `r2` of unit strength.
pub struct Line {
    pub r1: SpatialVector,
    pub r2: SpatialVector,
}

impl Line {
    pub fn new(r1: SpatialVector, r2: SpatialVector) -> Self {
        Self { r1, r2 }
    }

    /// Unit-strength induced velocity at `point`, the numerically stable
    /// "Moran" form of spec.md §4.E. Singularity-guarded: if the point lies
    /// within [`BIOT_SAVART_EPSILON`] of the filament (on the line but
    /// possibly outside the finite segment), the induced velocity is zero.
    pub fn induced_velocity_unit_strength(&self, point: SpatialVector) -> SpatialVector {
        let a = point - self.r1;
        let b = point - self.r2;

        let a_len = a.length();
        let b_len = b.length();
        let cross = a.cross(b);
        let cross_len = cross.length();

        if a_len.min(b_len).min(cross_len) < BIOT_SAVART_EPSILON {
            return SpatialVector::default();
        }

        let denominator = a_len * b_len + a.dot(b);

        (1.0 / a_len + 1.0 / b_len) * cross * (FOUR_PI_INVERSE / denominator)
    }
}
