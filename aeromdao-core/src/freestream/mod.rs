//! Freestream flow conditions for the 3D vortex-lattice method and the 2D
//! panel method (spec.md §3).

use aeromath::spatial_vector::SpatialVector;
use aeromath::type_aliases::Float;

use crate::error::Error;

#[derive(Debug, Clone, Copy)]
/// A 3D freestream condition: speed, angle of attack, sideslip, and
/// body-axis angular rate.
pub struct Freestream {
    pub speed: Float,
    pub alpha: Float,
    pub beta: Float,
    pub omega: SpatialVector,
}

impl Freestream {
    pub fn new(speed: Float, alpha: Float, beta: Float, omega: SpatialVector) -> Result<Self, Error> {
        if speed <= 0.0 {
            return Err(Error::InvalidFreestream(format!(
                "freestream speed must be positive, got {}",
                speed
            )));
        }

        Ok(Self {
            speed,
            alpha,
            beta,
            omega,
        })
    }

    /// Cartesian freestream velocity:
    /// `(V cos(a) cos(b), -V sin(b), V sin(a) cos(b))`.
    pub fn velocity(&self) -> SpatialVector {
        SpatialVector::new(
            self.speed * self.alpha.cos() * self.beta.cos(),
            -self.speed * self.beta.sin(),
            self.speed * self.alpha.sin() * self.beta.cos(),
        )
    }

    /// Unit direction of the freestream (`velocity() / speed`).
    pub fn direction(&self) -> SpatialVector {
        self.velocity().normalize()
    }
}

#[derive(Debug, Clone, Copy)]
/// A 2D freestream condition for the 2D panel method: speed and angle of
/// attack.
pub struct Freestream2D {
    pub speed: Float,
    pub alpha: Float,
}

impl Freestream2D {
    pub fn new(speed: Float, alpha: Float) -> Result<Self, Error> {
        if speed <= 0.0 {
            return Err(Error::InvalidFreestream(format!(
                "freestream speed must be positive, got {}",
                speed
            )));
        }

        Ok(Self { speed, alpha })
    }

    pub fn velocity(&self) -> aeromath::Point2D {
        aeromath::Point2D::new(self.speed * self.alpha.cos(), self.speed * self.alpha.sin())
    }
}
