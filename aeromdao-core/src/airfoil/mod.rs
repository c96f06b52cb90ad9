//! Airfoil representation: an ordered 2D coordinate set in Selig order
//! (upper surface from trailing edge to leading edge, then lower surface
//! back to trailing edge).

mod naca;

pub use naca::naca_4_digit;

use aeromath::point2d::Point2D;
use aeromath::spacing;
use aeromath::type_aliases::Float;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Airfoil {
    /// Points in Selig order: upper TE -> LE -> lower TE.
    pub points: Vec<Point2D>,
}

impl Airfoil {
    /// Builds an airfoil from a raw Selig-ordered coordinate sequence.
    ///
    /// The only validated invariant is that there are enough points to form a
    /// closed (or sharp open trailing-edge) outline; the core does not parse
    /// coordinate files itself (an external parser supplies this `Vec`).
    pub fn from_points(points: Vec<Point2D>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::InvalidGeometry(
                "airfoil requires at least 3 coordinate points".to_string(),
            ));
        }

        Ok(Self { points })
    }

    /// Index of the leading-edge point: the minimum-x point in the sequence.
    fn leading_edge_index(&self) -> usize {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.x.partial_cmp(&b.x).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    }

    /// Splits the outline into upper and lower surfaces at the leading edge,
    /// each ordered from the leading edge to the trailing edge with strictly
    /// increasing `x`.
    pub fn split_at_leading_edge(&self) -> (Vec<Point2D>, Vec<Point2D>) {
        let le = self.leading_edge_index();

        // Both halves include the leading-edge point, so each spans the
        // full chord with strictly increasing x.
        let upper: Vec<Point2D> = self.points[..=le].iter().rev().copied().collect();
        let lower: Vec<Point2D> = self.points[le..].to_vec();

        (upper, lower)
    }

    /// Resamples the upper and lower surfaces independently onto `n`
    /// cosine-spaced x-stations each, by linear interpolation of the
    /// existing outline. Idempotent: resampling an already-cosine-spaced
    /// airfoil at the same `n` reproduces the same points.
    pub fn cosine_resample(&self, n: usize) -> Self {
        let (upper, lower) = self.split_at_leading_edge();

        let x0 = lower.first().map(|p| p.x).unwrap_or(0.0);
        let x1 = lower.last().map(|p| p.x).unwrap_or(1.0);
        let xs = spacing::cosine(x0, x1, n);

        let upper_resampled: Vec<Point2D> = xs
            .iter()
            .rev()
            .map(|&x| Point2D::new(x, interpolate_y(&upper, x)))
            .collect();
        let lower_resampled: Vec<Point2D> = xs
            .iter()
            .map(|&x| Point2D::new(x, interpolate_y(&lower, x)))
            .collect();

        let mut points = upper_resampled;
        points.extend(lower_resampled.into_iter().skip(1));

        Self { points }
    }

    /// Splits the outline into matched upper/lower `y` values at common `x`
    /// stations, then returns the camber line (average) and thickness
    /// distribution (half the upper-minus-lower difference).
    pub fn camber_and_thickness(&self) -> (Vec<Point2D>, Vec<Float>) {
        let (upper, lower) = self.split_at_leading_edge();

        let xs: Vec<Float> = lower.iter().map(|p| p.x).collect();

        let camber: Vec<Point2D> = xs
            .iter()
            .map(|&x| {
                let yu = interpolate_y(&upper, x);
                let yl = interpolate_y(&lower, x);
                Point2D::new(x, 0.5 * (yu + yl))
            })
            .collect();

        let thickness: Vec<Float> = xs
            .iter()
            .map(|&x| {
                let yu = interpolate_y(&upper, x);
                let yl = interpolate_y(&lower, x);
                0.5 * (yu - yl)
            })
            .collect();

        (camber, thickness)
    }

    /// Camber-line `y` at chordwise fraction `x` (`0` at the leading edge,
    /// `1` at the trailing edge), by linear interpolation between the
    /// nearest camber-line stations. Used by the paneller to build the
    /// camber mesh without modeling camber geometrically in the bound mesh
    /// (spec.md §4.D).
    pub fn camber_y_at(&self, x: Float) -> Float {
        let (camber, _) = self.camber_and_thickness();
        interpolate_y(&camber, x)
    }
}

/// Linear interpolation of `y` at `x` along a polyline ordered by increasing
/// `x`. Clamps to the nearest endpoint outside the polyline's range.
fn interpolate_y(polyline: &[Point2D], x: Float) -> Float {
    if polyline.is_empty() {
        return 0.0;
    }
    if polyline.len() == 1 || x <= polyline[0].x {
        return polyline[0].y;
    }
    if x >= polyline[polyline.len() - 1].x {
        return polyline[polyline.len() - 1].y;
    }

    for w in polyline.windows(2) {
        let (a, b) = (w[0], w[1]);
        if x >= a.x && x <= b.x {
            let mu = if (b.x - a.x).abs() > 0.0 {
                (x - a.x) / (b.x - a.x)
            } else {
                0.0
            };
            return aeromath::interpolation::weighted(a.y, b.y, mu);
        }
    }

    polyline[polyline.len() - 1].y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric_diamond() -> Airfoil {
        // A simple symmetric, closed outline: upper TE -> LE -> lower TE.
        Airfoil::from_points(vec![
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 0.05),
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, -0.05),
            Point2D::new(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn camber_is_zero_for_symmetric_airfoil() {
        let foil = symmetric_diamond();
        let (camber, thickness) = foil.camber_and_thickness();

        for p in &camber {
            assert!(p.y.abs() < 1e-12);
        }
        assert!(thickness.iter().any(|&t| t > 0.0));
    }

    #[test]
    fn cosine_resample_is_idempotent() {
        let foil = symmetric_diamond();
        let once = foil.cosine_resample(21);
        let twice = once.cosine_resample(21);

        assert_eq!(once.points.len(), twice.points.len());
        for (a, b) in once.points.iter().zip(twice.points.iter()) {
            assert!((a.x - b.x).abs() < 1e-10);
            assert!((a.y - b.y).abs() < 1e-10);
        }
    }
}
