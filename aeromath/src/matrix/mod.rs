//! A dense, row-major matrix with the standard arithmetic operations and a
//! partial-pivoting LU solver.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub mod linalg;
pub mod operators;
pub mod transforms;

use crate::type_aliases::Float;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A 2D matrix that can store data of any type `T`, backed by a flat,
/// row-major `Vec<T>`.
pub struct Matrix<T> {
    /// Row-major data.
    pub data: Vec<T>,
    /// `[rows, cols]`.
    pub shape: [usize; 2],
}

impl<T> Matrix<T>
where
    T: Default + Clone + Copy + Debug,
{
    pub fn from_elem(shape: [usize; 2], elem: T) -> Self {
        Self {
            data: vec![elem; shape[0] * shape[1]],
            shape,
        }
    }

    pub fn new_default(shape: [usize; 2]) -> Self {
        Self::from_elem(shape, T::default())
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let nr_rows = rows.len();
        let nr_cols = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nr_rows * nr_cols);
        for row in rows {
            assert_eq!(row.len(), nr_cols, "all rows must have equal length");
            data.extend(row);
        }

        Self {
            data,
            shape: [nr_rows, nr_cols],
        }
    }

    #[inline(always)]
    pub fn flat_index(&self, indices: [usize; 2]) -> usize {
        indices[0] * self.shape[1] + indices[1]
    }

    pub fn nr_rows(&self) -> usize {
        self.shape[0]
    }

    pub fn nr_cols(&self) -> usize {
        self.shape[1]
    }

    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.shape[1];
        &self.data[start..start + self.shape[1]]
    }
}

impl Matrix<Float> {
    pub fn identity(size: usize) -> Self {
        let mut out = Self::new_default([size, size]);

        for i in 0..size {
            out[[i, i]] = 1.0;
        }

        out
    }
}
