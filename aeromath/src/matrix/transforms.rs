//! Ways to transform a matrix: [`transpose`](Matrix::transpose) and
//! [`diagonal`](Matrix::diagonal).

use std::fmt::Debug;

use super::Matrix;

impl<T> Matrix<T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Transposes the matrix, swapping rows and columns.
    pub fn transpose(&self) -> Self {
        let mut result = Matrix::new_default([self.shape[1], self.shape[0]]);

        for i in 0..self.shape[0] {
            for j in 0..self.shape[1] {
                result[[j, i]] = self[[i, j]];
            }
        }

        result
    }

    /// Returns a new matrix containing only the diagonal of `self`.
    pub fn diagonal(&self) -> Self {
        assert_eq!(self.shape[0], self.shape[1], "matrix must be square to extract diagonal");

        let mut result = Matrix::new_default(self.shape);

        for i in 0..self.shape[0] {
            result[[i, i]] = self[[i, i]];
        }

        result
    }
}
