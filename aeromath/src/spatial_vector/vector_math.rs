use super::*;

impl SpatialVector {
    #[inline(always)]
    /// Returns the dot product of two vectors.
    pub fn dot(self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline(always)]
    /// Returns the squared length of the vector.
    pub fn length_squared(self) -> Float {
        self.dot(self)
    }

    #[inline(always)]
    /// Returns the length of the vector.
    pub fn length(self) -> Float {
        self.length_squared().sqrt()
    }

    #[inline(always)]
    /// Returns the distance between two points.
    pub fn distance(self, rhs: Self) -> Float {
        (self - rhs).length()
    }

    #[inline(always)]
    /// Returns the cross product of two vectors.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline(always)]
    /// Returns a normalized copy of the vector, or the zero vector if the
    /// length is zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();

        if length > 0.0 {
            *self / length
        } else {
            Self::default()
        }
    }

    #[inline(always)]
    /// Rotates this vector about the given axis by `angle` radians
    /// (right-hand rule), using Rodrigues' rotation formula.
    pub fn rotate_about_axis(self, axis: Self, angle: Float) -> Self {
        let k = axis.normalize();

        self * angle.cos()
            + k.cross(self) * angle.sin()
            + k * k.dot(self) * (1.0 - angle.cos())
    }
}
