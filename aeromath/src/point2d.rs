//! A 2D point/vector, used for airfoil coordinates and the 2D panel method.

use std::ops;

use serde::{Deserialize, Serialize};

use crate::type_aliases::Float;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: Float,
    pub y: Float,
}

impl Point2D {
    #[inline(always)]
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn dot(self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline(always)]
    pub fn length_squared(self) -> Float {
        self.dot(self)
    }

    #[inline(always)]
    pub fn length(self) -> Float {
        self.length_squared().sqrt()
    }

    #[inline(always)]
    pub fn normalize(self) -> Self {
        let length = self.length();

        if length > 0.0 {
            self / length
        } else {
            Self::default()
        }
    }

    #[inline(always)]
    /// Rotates the point about the origin by `theta` radians.
    pub fn rotate(self, theta: Float) -> Self {
        let (s, c) = theta.sin_cos();

        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// The outward-facing normal of a 2D segment direction (rotate -90 degrees).
    #[inline(always)]
    pub fn right_normal(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ops::Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl ops::Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<Float> for Point2D {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Div<Float> for Point2D {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl ops::Neg for Point2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
