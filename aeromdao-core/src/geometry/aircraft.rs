//! Aircraft: an ordered name-to-geometry mapping, per spec.md §9's guidance
//! to treat a full assembly (e.g. wing + horizontal tail + vertical tail) as
//! an ordered component map rather than a separate abstract type.

use super::wing::Wing;
use crate::paneling::Transform;

#[derive(Debug, Clone)]
/// A single named component of an aircraft: a wing-shaped surface plus the
/// rigid-body transform that places it relative to the aircraft origin
/// (e.g. an empennage offset aft of the main wing).
pub struct Component {
    pub name: String,
    pub wing: Wing,
    pub transform: Transform,
}

#[derive(Debug, Clone, Default)]
pub struct Aircraft {
    pub components: Vec<Component>,
}

impl Aircraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: impl Into<String>, wing: Wing, transform: Transform) -> Self {
        self.components.push(Component {
            name: name.into(),
            wing,
            transform,
        });
        self
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }
}
