//! Shared numeric constants.

use crate::type_aliases::Float;

/// Pi, at the working precision.
pub const PI: Float = std::f64::consts::PI;

/// Smallest positive normal `Float`, used as a zero-length/zero-velocity guard
/// where an exact `== 0.0` comparison would be fragile.
pub const MIN_POSITIVE: Float = Float::MIN_POSITIVE;

/// Distance below which a Biot-Savart filament is considered to pass through
/// the field point, per the singularity guard in the solver specification.
pub const BIOT_SAVART_EPSILON: Float = 1.0e-8;
