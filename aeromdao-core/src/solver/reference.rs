//! Reference quantities used to non-dimensionalize forces and moments.

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceValues {
    /// Reference area `S_ref`, typically the wing's projected area.
    pub s_ref: Float,
    /// Reference span `b_ref`, used to non-dimensionalize rolling/yawing
    /// moments and the roll/yaw rate coefficients.
    pub b_ref: Float,
    /// Reference chord `c_ref` (typically the mean aerodynamic chord), used
    /// to non-dimensionalize the pitching moment and pitch-rate
    /// coefficient.
    pub c_ref: Float,
    /// Moment reference point.
    pub r_ref: SpatialVector,
    /// Freestream density, used to form the dynamic pressure.
    #[serde(default = "ReferenceValues::default_density")]
    pub density: Float,
}

impl ReferenceValues {
    pub fn default_density() -> Float {
        1.225
    }

    pub fn dynamic_pressure(&self, speed: Float) -> Float {
        0.5 * self.density * speed * speed
    }
}
