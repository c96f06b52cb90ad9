//! Configuration for the paneller: spanwise/chordwise panel counts and
//! spacing distribution, serde-loadable per spec.md §6/§14.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(deny_unknown_fields)]
/// A 1D spacing distribution used for both the spanwise and chordwise
/// subdivision of a panel segment.
pub enum Spacing {
    Uniform,
    Cosine,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Cosine
    }
}

impl Spacing {
    /// `n + 1` stations in `[0, 1]` following this distribution.
    pub fn stations(&self, n: usize) -> Vec<f64> {
        match self {
            Spacing::Uniform => aeromath::spacing::uniform(0.0, 1.0, n + 1),
            Spacing::Cosine => aeromath::spacing::cosine(0.0, 1.0, n + 1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Panel-count and spacing configuration for [`super::mesh_half_wing`].
pub struct PanelSettings {
    /// Spanwise panel count per inter-section (one entry per `HalfWing`
    /// inter-section).
    pub spanwise_panels: Vec<usize>,
    /// Chordwise panel count, shared across all inter-sections.
    #[serde(default = "PanelSettings::default_chordwise_panels")]
    pub chordwise_panels: usize,
    #[serde(default)]
    pub spacing: Spacing,
}

impl PanelSettings {
    pub fn default_chordwise_panels() -> usize {
        8
    }
}
