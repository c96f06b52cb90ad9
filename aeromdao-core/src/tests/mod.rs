//! End-to-end solve scenarios exercising the whole pipeline: geometry ->
//! paneling -> AIC assembly -> solve -> post-processing.

mod naca0012_rectangular_wing;
mod streamline_asymptote;
mod symmetric_aircraft;
