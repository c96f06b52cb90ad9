//! Analytic 4-digit NACA airfoil construction.
//!
//! Not part of the distilled specification's module list, but present in the
//! original source and reintroduced here as the simplest way to exercise the
//! airfoil and 2D panel-method code paths without an external coordinate-file
//! parser. This is a pure analytic generator, not file I/O.

use aeromath::point2d::Point2D;
use aeromath::spacing;
use aeromath::type_aliases::Float;

use crate::error::Error;

use super::Airfoil;

/// Builds a 4-digit NACA airfoil (e.g. `"2412"`) with `n` points per surface,
/// cosine-spaced along the chord.
pub fn naca_4_digit(code: &str, n: usize) -> Result<Airfoil, Error> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidGeometry(format!(
            "'{}' is not a 4-digit NACA code",
            code
        )));
    }

    let digits: Vec<u32> = code.chars().map(|c| c.to_digit(10).unwrap()).collect();

    let m = digits[0] as Float / 100.0;
    let p = digits[1] as Float / 10.0;
    let t = (digits[2] * 10 + digits[3]) as Float / 100.0;

    let xs = spacing::cosine(0.0, 1.0, n);

    let camber_line = |x: Float| -> Float {
        if p <= 0.0 || x >= p {
            if p >= 1.0 {
                0.0
            } else {
                m / (1.0 - p).powi(2) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
            }
        } else {
            m / p.powi(2) * (2.0 * p * x - x * x)
        }
    };

    let camber_slope = |x: Float| -> Float {
        if p <= 0.0 || x >= p {
            if p >= 1.0 {
                0.0
            } else {
                2.0 * m / (1.0 - p).powi(2) * (p - x)
            }
        } else {
            2.0 * m / p.powi(2) * (p - x)
        }
    };

    let thickness = |x: Float| -> Float {
        5.0 * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    };

    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);

    for &x in &xs {
        let yc = camber_line(x);
        let dyc = camber_slope(x);
        let yt = thickness(x);
        let theta = dyc.atan();

        upper.push(Point2D::new(x - yt * theta.sin(), yc + yt * theta.cos()));
        lower.push(Point2D::new(x + yt * theta.sin(), yc - yt * theta.cos()));
    }

    let mut points: Vec<Point2D> = upper.into_iter().rev().collect();
    points.extend(lower.into_iter().skip(1));

    Airfoil::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naca_0012_is_symmetric() {
        let foil = naca_4_digit("0012", 41).unwrap();
        let (camber, _) = foil.camber_and_thickness();

        for p in &camber {
            assert!(p.y.abs() < 1e-10);
        }
    }

    #[test]
    fn naca_2412_has_nonzero_camber() {
        let foil = naca_4_digit("2412", 41).unwrap();
        let (camber, _) = foil.camber_and_thickness();

        assert!(camber.iter().any(|p| p.y.abs() > 1e-6));
    }

    #[test]
    fn rejects_malformed_code() {
        assert!(naca_4_digit("00A2", 21).is_err());
        assert!(naca_4_digit("001", 21).is_err());
    }
}
