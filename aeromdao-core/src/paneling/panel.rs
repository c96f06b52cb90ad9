//! `Panel3D`: an ordered quadrilateral of 3D points.

use aeromath::interpolation::weighted_point;
use aeromath::spatial_vector::geometry_functions;
use aeromath::spatial_vector::SpatialVector;

use crate::vortex::Line;

#[derive(Debug, Clone, Copy)]
/// An ordered quadruple `(p1, p2, p3, p4)`: `p1` forward-inboard, `p2`
/// aft-inboard, `p3` aft-outboard, `p4` forward-outboard, with the local
/// normal pointing upward for a standard wing in level flight.
pub struct Panel3D {
    pub p1: SpatialVector,
    pub p2: SpatialVector,
    pub p3: SpatialVector,
    pub p4: SpatialVector,
}

impl Panel3D {
    pub fn new(p1: SpatialVector, p2: SpatialVector, p3: SpatialVector, p4: SpatialVector) -> Self {
        Self { p1, p2, p3, p4 }
    }

    #[inline(always)]
    fn corners(&self) -> [SpatialVector; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Centroid (average of the four corners).
    pub fn center(&self) -> SpatialVector {
        geometry_functions::center_of_quadrilateral(&self.corners())
    }

    /// Unit normal, computed from the cross product of the two diagonals,
    /// pointing upward for a standard wing in level flight.
    pub fn normal(&self) -> SpatialVector {
        geometry_functions::normal_of_quadrilateral(&self.corners())
    }

    /// Planform area of the (assumed near-planar) quadrilateral.
    pub fn area(&self) -> f64 {
        geometry_functions::area_of_quadrilateral(&self.corners())
    }

    /// The quarter-chord bound leg and three-quarter-chord collocation
    /// point, per spec.md §4.D (Pistolesi's theorem): the bound leg sits at
    /// 1/4 chord, the collocation point at 3/4 chord, both placed with
    /// [`weighted_point`] so only the in-plane (chordwise) offset shifts
    /// while the spanwise coordinate of each edge is preserved.
    pub fn bound_leg_and_collocation(&self) -> (Line, SpatialVector) {
        let v_fwd_inboard = weighted_point(self.p1, self.p2, 0.25, 0.0, 0.25);
        let v_fwd_outboard = weighted_point(self.p4, self.p3, 0.25, 0.0, 0.25);

        let collocation_inboard = weighted_point(self.p1, self.p2, 0.75, 0.0, 0.75);
        let collocation_outboard = weighted_point(self.p4, self.p3, 0.75, 0.0, 0.75);
        let collocation = 0.5 * (collocation_inboard + collocation_outboard);

        (Line::new(v_fwd_inboard, v_fwd_outboard), collocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_panel() -> Panel3D {
        // A flat rectangular panel in the x-y plane, chord along x, span
        // along y, spanning x in [0, 1], y in [0, 2].
        Panel3D::new(
            SpatialVector::new(0.0, 0.0, 0.0),
            SpatialVector::new(1.0, 0.0, 0.0),
            SpatialVector::new(1.0, 2.0, 0.0),
            SpatialVector::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn bound_leg_sits_at_quarter_chord() {
        let panel = flat_panel();
        let (bound, collocation) = panel.bound_leg_and_collocation();

        assert!((bound.r1.x - 0.25).abs() < 1e-12);
        assert!((bound.r1.y - 0.0).abs() < 1e-12);
        assert!((bound.r2.x - 0.25).abs() < 1e-12);
        assert!((bound.r2.y - 2.0).abs() < 1e-12);

        assert!((collocation.x - 0.75).abs() < 1e-12);
        assert!((collocation.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_points_up_for_a_flat_wing_panel() {
        let panel = flat_panel();
        let normal = panel.normal();

        assert!((normal.z.abs() - 1.0).abs() < 1e-12);
    }
}
