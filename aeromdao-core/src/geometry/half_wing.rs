//! Half-wing composition from sections, leading/trailing-edge curves, and
//! planform properties (projected area, span, mean aerodynamic chord).

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use crate::airfoil::Airfoil;
use crate::error::Error;

#[derive(Debug, Clone)]
/// A single spanwise station of a half-wing: an airfoil plus its chord
/// length and twist angle.
///
/// The twist is stored negated relative to the constructor's input, so that
/// `c_k * sin(twist_k)` in [`HalfWing::trailing_edge_point`] produces a
/// nose-up rotation (trailing edge moving down in `z`) for a positive input
/// twist, matching the leading-edge-up sign convention.
pub struct Section {
    pub airfoil: Airfoil,
    pub chord: Float,
    twist: Float,
}

impl Section {
    pub fn new(airfoil: Airfoil, chord: Float, twist: Float) -> Result<Self, Error> {
        if chord <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "section chord must be positive, got {}",
                chord
            )));
        }

        Ok(Self {
            airfoil,
            chord,
            twist: -twist,
        })
    }

    /// The stored (negated) twist used in downstream trigonometry.
    #[inline(always)]
    pub fn twist(&self) -> Float {
        self.twist
    }
}

#[derive(Debug, Clone)]
/// An ordered sequence of `N >= 2` spanwise sections and the `N - 1`
/// trapezoidal panels between them.
pub struct HalfWing {
    pub sections: Vec<Section>,
    /// Inter-section span lengths (`N - 1` entries, all positive).
    pub spans: Vec<Float>,
    /// Inter-section dihedral angles in radians (`N - 1` entries).
    pub dihedrals: Vec<Float>,
    /// Inter-section leading-edge sweep angles in radians (`N - 1` entries).
    pub sweeps: Vec<Float>,
}

impl HalfWing {
    pub fn new(
        sections: Vec<Section>,
        spans: Vec<Float>,
        dihedrals: Vec<Float>,
        sweeps: Vec<Float>,
    ) -> Result<Self, Error> {
        if sections.len() < 2 {
            return Err(Error::InvalidGeometry(
                "half-wing requires at least two sections".to_string(),
            ));
        }

        let n_inter = sections.len() - 1;
        if spans.len() != n_inter || dihedrals.len() != n_inter || sweeps.len() != n_inter {
            return Err(Error::InvalidGeometry(format!(
                "expected {} inter-section entries, got spans={}, dihedrals={}, sweeps={}",
                n_inter,
                spans.len(),
                dihedrals.len(),
                sweeps.len()
            )));
        }

        if spans.iter().any(|&s| s <= 0.0) {
            return Err(Error::InvalidGeometry(
                "all inter-section spans must be positive".to_string(),
            ));
        }

        Ok(Self {
            sections,
            spans,
            dihedrals,
            sweeps,
        })
    }

    #[inline(always)]
    pub fn n_sections(&self) -> usize {
        self.sections.len()
    }

    /// Leading-edge curve, one point per section, following the recurrence
    /// of spec.md §4.C. `mirrored` negates the `y` increment, used when
    /// meshing the left half of a [`crate::geometry::Wing`].
    pub fn leading_edge_curve(&self, mirrored: bool) -> Vec<SpatialVector> {
        let y_sign = if mirrored { -1.0 } else { 1.0 };

        let mut curve = Vec::with_capacity(self.n_sections());
        curve.push(SpatialVector::default());

        for k in 0..self.spans.len() {
            let prev = curve[k];
            let span = self.spans[k];

            curve.push(SpatialVector::new(
                prev.x + span * self.sweeps[k].tan(),
                prev.y + y_sign * span,
                prev.z + span * self.dihedrals[k].tan(),
            ));
        }

        curve
    }

    /// The trailing-edge point of section `k`: the leading-edge point offset
    /// by the twisted-chord displacement in the local x-z plane.
    pub fn trailing_edge_point(&self, k: usize, leading_edge: &[SpatialVector]) -> SpatialVector {
        let le = leading_edge[k];
        let section = &self.sections[k];

        le + SpatialVector::new(section.chord, 0.0, section.chord * section.twist().sin())
    }

    /// Mean chord of inter-section `k` (average of the bounding sections'
    /// chords).
    fn mean_chord(&self, k: usize) -> Float {
        0.5 * (self.sections[k].chord + self.sections[k + 1].chord)
    }

    /// Mean (stored, negated) twist of inter-section `k`.
    fn mean_twist(&self, k: usize) -> Float {
        0.5 * (self.sections[k].twist() + self.sections[k + 1].twist())
    }

    /// Projected (planform) area of inter-section `k`: the span increment
    /// times the mean chord projected onto the horizontal plane by the mean
    /// twist (sweep and dihedral shear the panel in x/z without changing its
    /// y-extent or projected chord, so neither factors into this area).
    fn panel_area(&self, k: usize) -> Float {
        self.spans[k] * self.mean_chord(k) * self.mean_twist(k).cos()
    }

    /// Total projected planform area, spec.md §4.C.
    pub fn projected_area(&self) -> Float {
        (0..self.spans.len()).map(|k| self.panel_area(k)).sum()
    }

    /// Total span, spec.md §4.C: the sum of the inter-section span lengths.
    pub fn span(&self) -> Float {
        self.spans.iter().sum()
    }

    /// Mean aerodynamic chord of a trapezoidal panel with root chord `c_r`
    /// and taper ratio `lambda = c_t / c_r`.
    fn panel_mac(&self, k: usize) -> Float {
        let c_r = self.sections[k].chord;
        let c_t = self.sections[k + 1].chord;
        let lambda = c_t / c_r;

        (2.0 / 3.0) * c_r * (1.0 + lambda + lambda * lambda) / (1.0 + lambda)
    }

    /// Weight used to area-average a panel's MAC: the untwisted planform
    /// area `spans[k] * mean_chord(k)`. This is a separate quantity from
    /// [`panel_area`](Self::panel_area) (which projects by `cos(mean_twist)`
    /// for the reported `projected_area`) — spec.md §4.C's MAC formula
    /// weights by panel area without the twist projection.
    fn mac_weight(&self, k: usize) -> Float {
        self.spans[k] * self.mean_chord(k)
    }

    /// Area-weighted mean aerodynamic chord, spec.md §4.C.
    pub fn mean_aerodynamic_chord(&self) -> Float {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for k in 0..self.spans.len() {
            let weight = self.mac_weight(k);
            numerator += self.panel_mac(k) * weight;
            denominator += weight;
        }

        numerator / denominator
    }

    /// Spanwise distance from inter-section `k`'s root to its local MAC
    /// station, using the standard trapezoidal-panel centroid formula.
    fn panel_mac_span_offset(&self, k: usize) -> Float {
        let c_r = self.sections[k].chord;
        let c_t = self.sections[k + 1].chord;
        let lambda = c_t / c_r;

        (self.spans[k] / 3.0) * (1.0 + 2.0 * lambda) / (1.0 + lambda)
    }

    /// The point at which the area-weighted mean aerodynamic chord's
    /// quarter-chord sits on the leading-edge curve: an area-weighted
    /// average, across inter-sections, of each panel's local MAC
    /// quarter-chord point (assuming straight leading-edge sweep within the
    /// panel).
    pub fn mac_location(&self, mirrored: bool) -> SpatialVector {
        let leading_edge = self.leading_edge_curve(mirrored);
        let y_sign = if mirrored { -1.0 } else { 1.0 };

        let mut weighted = SpatialVector::default();
        let mut total_weight = 0.0;

        for k in 0..self.spans.len() {
            let weight = self.mac_weight(k);
            let span_offset = self.panel_mac_span_offset(k);

            let root = leading_edge[k];
            let quarter_chord = SpatialVector::new(
                root.x + span_offset * self.sweeps[k].tan() + 0.25 * self.panel_mac(k),
                root.y + y_sign * span_offset,
                root.z + span_offset * self.dihedrals[k].tan(),
            );

            weighted += quarter_chord * weight;
            total_weight += weight;
        }

        weighted / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca_4_digit;

    fn two_section_half_wing() -> HalfWing {
        let foil = naca_4_digit("0012", 21).unwrap();

        let sections = vec![
            Section::new(foil.clone(), 1.0, 2.0_f64.to_radians()).unwrap(),
            Section::new(foil.clone(), 0.6, 0.0).unwrap(),
            Section::new(foil, 0.2, (-0.2_f64).to_radians()).unwrap(),
        ];

        HalfWing::new(
            sections,
            vec![5.0, 0.5],
            vec![5.0_f64.to_radians(), 5.0_f64.to_radians()],
            vec![5.0_f64.to_radians(), 5.0_f64.to_radians()],
        )
        .unwrap()
    }

    #[test]
    fn s2_planform_properties_match_reference() {
        let wing = two_section_half_wing();

        assert!((wing.span() - 5.5).abs() < 1e-6);
        assert!((wing.projected_area() - 4.19939047).abs() < 1e-6);
        assert!((wing.mean_aerodynamic_chord() - 0.79841269).abs() < 1e-6);

        let aspect_ratio = wing.span().powi(2) / wing.projected_area();
        assert!((aspect_ratio - 7.20342634).abs() < 1e-6);
    }

    #[test]
    fn rejects_fewer_than_two_sections() {
        let foil = naca_4_digit("0012", 11).unwrap();
        let result = HalfWing::new(vec![Section::new(foil, 1.0, 0.0).unwrap()], vec![], vec![], vec![]);

        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn rejects_mismatched_array_lengths() {
        let foil = naca_4_digit("0012", 11).unwrap();
        let sections = vec![
            Section::new(foil.clone(), 1.0, 0.0).unwrap(),
            Section::new(foil, 0.5, 0.0).unwrap(),
        ];

        let result = HalfWing::new(sections, vec![1.0, 2.0], vec![0.0], vec![0.0]);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn uniform_geometric_scaling_is_linear_in_span_and_mac_quadratic_in_area() {
        let foil = naca_4_digit("0012", 11).unwrap();
        let make_wing = |scale: Float| {
            let sections = vec![
                Section::new(foil.clone(), 1.0 * scale, 0.0).unwrap(),
                Section::new(foil.clone(), 0.6 * scale, 0.0).unwrap(),
            ];
            HalfWing::new(sections, vec![4.0 * scale], vec![0.0], vec![0.1]).unwrap()
        };

        let base = make_wing(1.0);
        let k = 2.0;
        let scaled = make_wing(k);

        assert!((scaled.span() - k * base.span()).abs() < 1e-9);
        assert!(
            (scaled.mean_aerodynamic_chord() - k * base.mean_aerodynamic_chord()).abs() < 1e-9
        );
        assert!((scaled.projected_area() - k * k * base.projected_area()).abs() < 1e-9);
    }
}
