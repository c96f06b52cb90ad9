//! Quadrilateral geometry helpers, used by the paneller to compute panel
//! centers and normals.

use super::*;

#[inline(always)]
/// Area of a (possibly non-planar) quadrilateral via Brahmagupta's formula
/// on the mean side lengths.
/// Source: <https://en.wikipedia.org/wiki/Brahmagupta%27s_formula>
pub fn area_of_quadrilateral(vertices: &[SpatialVector; 4]) -> Float {
    let a = (vertices[1] - vertices[0]).length();
    let b = (vertices[2] - vertices[1]).length();
    let c = (vertices[3] - vertices[2]).length();
    let d = (vertices[0] - vertices[3]).length();

    let s = (a + b + c + d) * 0.5;

    ((s - a) * (s - b) * (s - c) * (s - d)).max(0.0).sqrt()
}

#[inline(always)]
/// Unit normal of a quadrilateral, taken as the normalized cross product of
/// its two diagonals.
pub fn normal_of_quadrilateral(vertices: &[SpatialVector; 4]) -> SpatialVector {
    let a = vertices[2] - vertices[0];
    let b = vertices[3] - vertices[1];

    a.cross(b).normalize()
}

#[inline(always)]
/// Centroid of a quadrilateral (average of its four corners).
pub fn center_of_quadrilateral(vertices: &[SpatialVector; 4]) -> SpatialVector {
    0.25 * (vertices[0] + vertices[1] + vertices[2] + vertices[3])
}
