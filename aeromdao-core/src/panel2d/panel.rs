//! `Panel2D`: an oriented straight segment of the 2D panel method, and its
//! analytic constant-strength doublet/source potential kernels.

use aeromath::consts::PI;
use aeromath::point2d::Point2D;
use aeromath::type_aliases::Float;

const TWO_PI_INVERSE: Float = 1.0 / (2.0 * PI);
const FOUR_PI_INVERSE: Float = 1.0 / (4.0 * PI);
const MIN_R_SQUARED: Float = 1.0e-12;

#[derive(Debug, Clone, Copy)]
/// A straight panel from `p1` to `p2`. Panels are assumed ordered clockwise
/// around the airfoil starting at the trailing edge (the Selig point order
/// of [`crate::airfoil::Airfoil`]), so `tangent.right_normal()` points
/// outward.
pub struct Panel2D {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Panel2D {
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    pub fn length(&self) -> Float {
        (self.p2 - self.p1).length()
    }

    pub fn midpoint(&self) -> Point2D {
        (self.p1 + self.p2) * 0.5
    }

    pub fn tangent(&self) -> Point2D {
        (self.p2 - self.p1).normalize()
    }

    pub fn normal(&self) -> Point2D {
        self.tangent().right_normal()
    }

    /// Transforms `point` into this panel's local frame: `x` along the
    /// panel from `p1` (0) to `p2` (`length`), `y` along the outward normal.
    fn local_coordinates(&self, point: Point2D) -> (Float, Float) {
        let d = point - self.p1;
        let tangent = self.tangent();
        let normal = tangent.right_normal();

        (d.dot(tangent), d.dot(normal))
    }

    /// Unit-strength doublet potential induced at `point`:
    /// `phi = -(1 / 2*pi) * (atan2(y, x - length) - atan2(y, x))`. At the
    /// panel's own collocation point (`y = 0`, `x` strictly between the
    /// endpoints) this evaluates to the textbook self-influence `-0.5`
    /// (spec.md §4.J sets the diagonal directly rather than relying on this
    /// limit).
    pub fn doublet_potential_unit_strength(&self, point: Point2D) -> Float {
        let (x, y) = self.local_coordinates(point);
        let length = self.length();

        -TWO_PI_INVERSE * (y.atan2(x - length) - y.atan2(x))
    }

    /// Unit-strength source potential induced at `point`:
    /// `phi = (1 / 4*pi) * [x * ln(r1^2) - (x - length) * ln(r2^2)]
    ///        + (y / 2*pi) * (atan2(y, x - length) - atan2(y, x))`.
    pub fn source_potential_unit_strength(&self, point: Point2D) -> Float {
        let (x, y) = self.local_coordinates(point);
        let length = self.length();

        let r1_sq = (x * x + y * y).max(MIN_R_SQUARED);
        let r2_sq = ((x - length) * (x - length) + y * y).max(MIN_R_SQUARED);

        let log_term = x * r1_sq.ln() - (x - length) * r2_sq.ln();
        let atan_term = y.atan2(x - length) - y.atan2(x);

        FOUR_PI_INVERSE * log_term + TWO_PI_INVERSE * y * atan_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doublet_self_influence_matches_the_textbook_limit() {
        let panel = Panel2D::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0));
        let phi = panel.doublet_potential_unit_strength(panel.midpoint());

        assert!((phi - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn doublet_potential_vanishes_far_from_the_panel() {
        let panel = Panel2D::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0));
        let far = Point2D::new(0.5, 1.0e6);

        let phi = panel.doublet_potential_unit_strength(far);
        assert!(phi.abs() < 1e-6);
    }

    #[test]
    fn source_self_influence_matches_the_closed_form() {
        let length = 2.0;
        let panel = Panel2D::new(Point2D::new(0.0, 0.0), Point2D::new(length, 0.0));
        let phi = panel.source_potential_unit_strength(panel.midpoint());

        let expected = length * (length / 2.0).ln() / (2.0 * PI);
        assert!((phi - expected).abs() < 1e-9);
    }

    #[test]
    fn normal_is_perpendicular_to_tangent() {
        let panel = Panel2D::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 1.0));
        assert!(panel.tangent().dot(panel.normal()).abs() < 1e-12);
    }
}
