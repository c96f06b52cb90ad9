//! Spanwise + chordwise subdivision of a half-wing into quadrilateral
//! panels, producing both a straight-chord bound-leg mesh and a
//! camber-surface camber mesh from the same grid (spec.md §4.D).

use aeromath::interpolation::weighted;
use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use crate::geometry::{HalfWing, Wing};

use super::panel::Panel3D;
use super::settings::PanelSettings;

/// The point at chordwise fraction `t` (`0` at the leading edge, `1` at the
/// trailing edge) of a section with the given `chord` and `twist`, offset
/// from `leading_edge`, optionally displaced by a camber-line ordinate
/// `camber_y` (zero for the straight-chord bound mesh).
fn surface_point(
    leading_edge: SpatialVector,
    chord: Float,
    twist: Float,
    t: Float,
    camber_y: Float,
) -> SpatialVector {
    let (sin_twist, cos_twist) = twist.sin_cos();

    // Unit vector along the twisted chord line, and its in-plane normal.
    let chord_dir = SpatialVector::new(cos_twist, 0.0, sin_twist);
    let up = SpatialVector::new(-sin_twist, 0.0, cos_twist);

    leading_edge + chord_dir * (chord * t) + up * (chord * camber_y)
}

/// Meshes a single half-wing into a straight-chord bound-leg mesh and a
/// camber-line camber mesh, sharing the same spanwise x chordwise grid.
/// `mirrored` inverts the `y` axis, for the left half of a [`Wing`].
pub fn mesh_half_wing(
    half_wing: &HalfWing,
    settings: &PanelSettings,
    mirrored: bool,
) -> (Vec<Panel3D>, Vec<Panel3D>) {
    let leading_edge = half_wing.leading_edge_curve(mirrored);
    let chordwise = settings.spacing.stations(settings.chordwise_panels);

    let mut bound_mesh = Vec::new();
    let mut camber_mesh = Vec::new();

    for k in 0..half_wing.spans.len() {
        let n_span = settings
            .spanwise_panels
            .get(k)
            .copied()
            .unwrap_or(settings.spanwise_panels.last().copied().unwrap_or(1));
        let spanwise = settings.spacing.stations(n_span);

        let section_a = &half_wing.sections[k];
        let section_b = &half_wing.sections[k + 1];
        let le_a = leading_edge[k];
        let le_b = leading_edge[k + 1];

        for i in 0..n_span {
            let mu0 = spanwise[i];
            let mu1 = spanwise[i + 1];

            let le0 = le_a + (le_b - le_a) * mu0;
            let le1 = le_a + (le_b - le_a) * mu1;

            let chord0 = weighted(section_a.chord, section_b.chord, mu0);
            let chord1 = weighted(section_a.chord, section_b.chord, mu1);
            let twist0 = weighted(section_a.twist(), section_b.twist(), mu0);
            let twist1 = weighted(section_a.twist(), section_b.twist(), mu1);

            for j in 0..settings.chordwise_panels {
                let t0 = chordwise[j];
                let t1 = chordwise[j + 1];

                bound_mesh.push(Panel3D::new(
                    surface_point(le0, chord0, twist0, t0, 0.0),
                    surface_point(le0, chord0, twist0, t1, 0.0),
                    surface_point(le1, chord1, twist1, t1, 0.0),
                    surface_point(le1, chord1, twist1, t0, 0.0),
                ));

                let camber0 = weighted(
                    section_a.airfoil.camber_y_at(t0),
                    section_b.airfoil.camber_y_at(t0),
                    mu0,
                );
                let camber0_outer = weighted(
                    section_a.airfoil.camber_y_at(t0),
                    section_b.airfoil.camber_y_at(t0),
                    mu1,
                );
                let camber1_inner = weighted(
                    section_a.airfoil.camber_y_at(t1),
                    section_b.airfoil.camber_y_at(t1),
                    mu0,
                );
                let camber1_outer = weighted(
                    section_a.airfoil.camber_y_at(t1),
                    section_b.airfoil.camber_y_at(t1),
                    mu1,
                );

                camber_mesh.push(Panel3D::new(
                    surface_point(le0, chord0, twist0, t0, camber0),
                    surface_point(le0, chord0, twist0, t1, camber1_inner),
                    surface_point(le1, chord1, twist1, t1, camber1_outer),
                    surface_point(le1, chord1, twist1, t0, camber0_outer),
                ));
            }
        }
    }

    (bound_mesh, camber_mesh)
}

/// Meshes a full [`Wing`]: the left half is meshed with `y`-axis inversion
/// and concatenated with the right.
pub fn mesh_wing(wing: &Wing, settings: &PanelSettings) -> (Vec<Panel3D>, Vec<Panel3D>) {
    let (mut left_bound, mut left_camber) = mesh_half_wing(&wing.left, settings, true);
    let (right_bound, right_camber) = mesh_half_wing(&wing.right, settings, false);

    left_bound.extend(right_bound);
    left_camber.extend(right_camber);

    (left_bound, left_camber)
}
