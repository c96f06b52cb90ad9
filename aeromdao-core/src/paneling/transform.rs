//! Rigid-body transform used to place component meshes (e.g. a horizontal
//! or vertical tail offset from the wing origin), spec.md §4.D.

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use super::panel::Panel3D;

#[derive(Debug, Clone, Copy)]
/// Translation plus an axis/angle rotation (applied rotation-then-translation).
pub struct Transform {
    pub translation: SpatialVector,
    pub axis: SpatialVector,
    pub angle: Float,
}

impl Transform {
    pub fn new(translation: SpatialVector, axis: SpatialVector, angle: Float) -> Self {
        Self {
            translation,
            axis,
            angle,
        }
    }

    pub fn identity() -> Self {
        Self::new(SpatialVector::default(), SpatialVector::unit_z(), 0.0)
    }

    #[inline(always)]
    fn transform_point(&self, point: SpatialVector) -> SpatialVector {
        point.rotate_about_axis(self.axis, self.angle) + self.translation
    }

    #[inline(always)]
    fn inverse_transform_point(&self, point: SpatialVector) -> SpatialVector {
        (point - self.translation).rotate_about_axis(self.axis, -self.angle)
    }

    /// Applies this transform to every panel in `panels`.
    pub fn apply(&self, panels: &[Panel3D]) -> Vec<Panel3D> {
        panels
            .iter()
            .map(|p| {
                Panel3D::new(
                    self.transform_point(p.p1),
                    self.transform_point(p.p2),
                    self.transform_point(p.p3),
                    self.transform_point(p.p4),
                )
            })
            .collect()
    }

    /// Applies the inverse of this transform to every panel in `panels`.
    pub fn apply_inverse(&self, panels: &[Panel3D]) -> Vec<Panel3D> {
        panels
            .iter()
            .map(|p| {
                Panel3D::new(
                    self.inverse_transform_point(p.p1),
                    self.inverse_transform_point(p.p2),
                    self.inverse_transform_point(p.p3),
                    self.inverse_transform_point(p.p4),
                )
            })
            .collect()
    }
}
