//! A full wing: a pair of possibly-dissimilar half-wings, mirrored about the
//! x-z plane on the left side during meshing.

use aeromath::type_aliases::Float;

use super::half_wing::HalfWing;

#[derive(Debug, Clone)]
pub struct Wing {
    pub left: HalfWing,
    pub right: HalfWing,
}

impl Wing {
    pub fn new(left: HalfWing, right: HalfWing) -> Self {
        Self { left, right }
    }

    /// A symmetric wing built from the same half-wing geometry mirrored on
    /// both sides, the common case for a conventional aircraft wing or tail.
    pub fn symmetric(half_wing: HalfWing) -> Self {
        Self {
            left: half_wing.clone(),
            right: half_wing,
        }
    }

    /// Total projected planform area of both halves.
    pub fn projected_area(&self) -> Float {
        self.left.projected_area() + self.right.projected_area()
    }

    /// Total span (left + right).
    pub fn span(&self) -> Float {
        self.left.span() + self.right.span()
    }

    /// Area-weighted mean aerodynamic chord of the full wing.
    pub fn mean_aerodynamic_chord(&self) -> Float {
        let left_area = self.left.projected_area();
        let right_area = self.right.projected_area();

        (self.left.mean_aerodynamic_chord() * left_area
            + self.right.mean_aerodynamic_chord() * right_area)
            / (left_area + right_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca_4_digit;
    use crate::geometry::half_wing::Section;

    fn rectangular_half_wing() -> HalfWing {
        let foil = naca_4_digit("0012", 11).unwrap();
        let sections = vec![
            Section::new(foil.clone(), 0.18, 0.0).unwrap(),
            Section::new(foil, 0.16, 0.0).unwrap(),
        ];
        HalfWing::new(sections, vec![0.5], vec![5.0_f64.to_radians()], vec![1.14_f64.to_radians()])
            .unwrap()
    }

    #[test]
    fn symmetric_wing_doubles_half_wing_planform() {
        let half = rectangular_half_wing();
        let wing = Wing::symmetric(half.clone());

        assert!((wing.span() - 2.0 * half.span()).abs() < 1e-12);
        assert!((wing.projected_area() - 2.0 * half.projected_area()).abs() < 1e-12);
        assert!(
            (wing.mean_aerodynamic_chord() - half.mean_aerodynamic_chord()).abs() < 1e-12
        );
    }
}
