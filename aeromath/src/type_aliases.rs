//! Floating-point type used throughout the workspace.

/// All geometry and solver computations use double precision.
pub type Float = f64;
