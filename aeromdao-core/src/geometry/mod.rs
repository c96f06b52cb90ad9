//! Lifting-surface geometry: half-wing and full-wing composition from
//! sections, leading/trailing-edge curves, and planform properties
//! (projected area, span, mean aerodynamic chord).

mod half_wing;
mod wing;
mod aircraft;

pub use half_wing::{HalfWing, Section};
pub use wing::Wing;
pub use aircraft::Aircraft;
