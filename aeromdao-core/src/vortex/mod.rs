//! Vortex primitives: straight filaments and horseshoe vortices, and their
//! Biot-Savart induced-velocity kernels (spec.md §4.E).
//!
//! Vortex rings are a non-goal carried forward as a non-goal (spec.md §9):
//! horseshoes alone suffice for the vortex-lattice path this crate
//! implements.

mod horseshoe;
mod line;

pub use horseshoe::Horseshoe;
pub use line::Line;
