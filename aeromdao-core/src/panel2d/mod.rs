//! 2D constant-strength doublet-source panel method for airfoils, with a
//! Morino Kutta condition (spec.md §4.J).

mod panel;

pub use panel::Panel2D;

use aeromath::type_aliases::Float;
use aeromath::{Matrix, Point2D};
use serde::{Deserialize, Serialize};

use crate::airfoil::Airfoil;
use crate::error::Error;
use crate::freestream::Freestream2D;

const WAKE_LENGTH_CHORDS: Float = 1.0e4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Configuration for [`solve`]: the moment reference point and a
/// print-gated progress log, in the idiom of the reference codebase's
/// `*SolverSettings` structs (spec.md §13).
pub struct Panel2DSettings {
    #[serde(default = "Panel2DSettings::default_moment_reference")]
    pub moment_reference: Point2D,
    #[serde(default)]
    pub print_log: bool,
}

impl Panel2DSettings {
    pub fn default_moment_reference() -> Point2D {
        Point2D::new(0.25, 0.0)
    }
}

impl Default for Panel2DSettings {
    fn default() -> Self {
        Self {
            moment_reference: Self::default_moment_reference(),
            print_log: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel2DResult {
    /// Panel doublet strengths, one per airfoil panel.
    pub mu: Vec<Float>,
    /// Wake-panel doublet strength.
    pub mu_wake: Float,
    /// Pressure coefficient at each panel's collocation point.
    pub cp: Vec<Float>,
    pub cl: Float,
    pub cm: Float,
}

/// Builds the `N` oriented panels of a closed airfoil loop: panel `i` runs
/// from `points[i]` to `points[(i + 1) % N]`, so the last panel closes back
/// to the first (spec.md §4.J).
fn build_panels(airfoil: &Airfoil) -> Vec<Panel2D> {
    let points = &airfoil.points;
    let n = points.len();

    (0..n)
        .map(|i| Panel2D::new(points[i], points[(i + 1) % n]))
        .collect()
}

/// Solves the constant-strength doublet-source system for `airfoil` at the
/// given 2D `freestream` condition, per spec.md §4.J:
///
/// - Doublet matrix `D`: diagonal `0.5`, off-diagonal the analytic doublet
///   potential of panel `j` at panel `i`'s collocation point.
/// - Source matrix `S`: analytic source potential, including self-influence.
/// - Wake vector `w`: a single long doublet panel trailing from the
///   trailing edge along the freestream direction.
/// - Kutta row `[1, -1, 0, ..., 0, 1, -1]` enforcing equal potential jump at
///   the trailing edge.
///
/// The augmented `(N+1)x(N+1)` block system is solved with the same dense
/// LU solver as the 3D AIC system.
pub fn solve(airfoil: &Airfoil, freestream: Freestream2D, settings: Panel2DSettings) -> Result<Panel2DResult, Error> {
    let panels = build_panels(airfoil);
    let n = panels.len();

    if n < 4 {
        return Err(Error::InvalidGeometry(format!(
            "airfoil must have at least 4 panels for the 2D panel method, got {}",
            n
        )));
    }

    let collocation: Vec<Point2D> = panels.iter().map(|p| p.midpoint()).collect();
    let normals: Vec<Point2D> = panels.iter().map(|p| p.normal()).collect();

    let freestream_velocity = freestream.velocity();
    let sigma: Vec<Float> = normals.iter().map(|&n| freestream_velocity.dot(n)).collect();

    let wake_start = panels[0].p1;
    let wake_end = wake_start + freestream.velocity().normalize() * WAKE_LENGTH_CHORDS;
    let wake_panel = Panel2D::new(wake_start, wake_end);

    let size = n + 1;
    let mut a = Matrix::<Float>::new_default([size, size]);
    let mut rhs = vec![0.0; size];

    for i in 0..n {
        for j in 0..n {
            a[[i, j]] = if i == j {
                0.5
            } else {
                panels[j].doublet_potential_unit_strength(collocation[i])
            };
        }

        a[[i, n]] = wake_panel.doublet_potential_unit_strength(collocation[i]);

        let source_term: Float = (0..n)
            .map(|j| panels[j].source_potential_unit_strength(collocation[i]) * sigma[j])
            .sum();
        rhs[i] = -source_term;
    }

    // Kutta condition: mu_1 - mu_2 + mu_{N-1} - mu_N = 0 (spec.md §4.J).
    a[[n, 0]] = 1.0;
    a[[n, 1]] = -1.0;
    a[[n, n - 2]] = 1.0;
    a[[n, n - 1]] = -1.0;
    rhs[n] = 0.0;

    let solution = a.solve(&rhs)?;
    let mu = solution[..n].to_vec();
    let mu_wake = solution[n];

    if settings.print_log {
        println!("2D panel method converged: mu_wake = {}", mu_wake);
    }

    let cp = surface_pressure_coefficients(&panels, &mu, freestream.speed);
    let (cl, cm) = integrate_loads(&panels, &normals, &cp, freestream, settings.moment_reference);

    Ok(Panel2DResult { mu, mu_wake, cp, cl, cm })
}

/// Recovers each panel's tangential velocity by central-differencing `mu`
/// along the arc length of the surface, then `Cp = 1 - (v_tan / Vinf)^2`
/// (spec.md §4.J).
fn surface_pressure_coefficients(panels: &[Panel2D], mu: &[Float], speed: Float) -> Vec<Float> {
    let n = panels.len();
    let lengths: Vec<Float> = panels.iter().map(|p| p.length()).collect();
    let perimeter: Float = lengths.iter().sum();

    // Arc-length coordinate of each panel's collocation point.
    let mut s = vec![0.0; n];
    s[0] = 0.5 * lengths[0];
    for i in 1..n {
        s[i] = s[i - 1] + 0.5 * lengths[i - 1] + 0.5 * lengths[i];
    }

    (0..n)
        .map(|i| {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;

            let mut ds_prev = s[i] - s[prev];
            if ds_prev <= 0.0 {
                ds_prev += perimeter;
            }
            let mut ds_next = s[next] - s[i];
            if ds_next <= 0.0 {
                ds_next += perimeter;
            }

            let v_tan = (mu[next] - mu[prev]) / (ds_prev + ds_next);
            1.0 - (v_tan / speed) * (v_tan / speed)
        })
        .collect()
}

/// Integrates `Cp` around the surface to the section lift and pitching-moment
/// coefficients, per spec.md §4.J ("integrate Cp.tangent and Cp.moment-arm").
fn integrate_loads(
    panels: &[Panel2D],
    normals: &[Point2D],
    cp: &[Float],
    freestream: Freestream2D,
    moment_reference: Point2D,
) -> (Float, Float) {
    let lift_direction = freestream.velocity().normalize().right_normal();

    let mut force = Point2D::default();
    let mut moment = 0.0;

    for i in 0..panels.len() {
        let df = normals[i] * (-cp[i] * panels[i].length());
        let arm = panels[i].midpoint() - moment_reference;

        force += df;
        moment += arm.x * df.y - arm.y * df.x;
    }

    let cl = force.dot(lift_direction);
    (cl, moment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca_4_digit;

    #[test]
    fn symmetric_airfoil_at_zero_alpha_has_near_zero_lift() {
        let foil = naca_4_digit("0012", 41).unwrap();
        let freestream = Freestream2D::new(1.0, 0.0).unwrap();

        let result = solve(&foil, freestream, Panel2DSettings::default()).unwrap();

        assert!(result.cl.abs() < 0.05);
    }

    #[test]
    fn symmetric_airfoil_generates_lift_at_positive_alpha() {
        let foil = naca_4_digit("0012", 41).unwrap();
        let freestream = Freestream2D::new(1.0, 5.0_f64.to_radians()).unwrap();

        let result = solve(&foil, freestream, Panel2DSettings::default()).unwrap();

        assert!(result.cl > 0.0);
        assert_eq!(result.cp.len(), result.mu.len());
    }

    #[test]
    fn rejects_an_airfoil_with_too_few_panels() {
        let foil = Airfoil::from_points(vec![
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 0.02),
            Point2D::new(0.0, 0.0),
        ])
        .unwrap();
        let freestream = Freestream2D::new(1.0, 0.0).unwrap();

        let result = solve(&foil, freestream, Panel2DSettings::default());
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }
}
