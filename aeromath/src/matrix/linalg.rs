//! Dense linear solve via LU factorization with partial pivoting.

use crate::error::Error;
use crate::type_aliases::Float;

use super::Matrix;

/// Minimum admissible magnitude for a diagonal pivot. Below this the matrix
/// is considered numerically singular.
const PIVOT_TOLERANCE: Float = 1.0e-12;

/// In-place LU factorization with partial pivoting.
///
/// `self` is overwritten with the combined `L`/`U` factors (unit diagonal on
/// `L` is implicit, not stored). Returns the row-permutation vector such that
/// `P . A = L . U`, i.e. `permutation[i]` is the original row now sitting at
/// row `i`.
struct LuFactorization {
    combined: Matrix<Float>,
    permutation: Vec<usize>,
}

fn lu_factorize(matrix: &Matrix<Float>) -> Result<LuFactorization, Error> {
    let n = matrix.nr_rows();
    assert_eq!(n, matrix.nr_cols(), "matrix must be square for LU factorization");

    let mut a = matrix.clone();
    let mut permutation: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_value = a[[k, k]].abs();

        for i in (k + 1)..n {
            let value = a[[i, k]].abs();
            if value > pivot_value {
                pivot_value = value;
                pivot_row = i;
            }
        }

        if pivot_value < PIVOT_TOLERANCE {
            return Err(Error::SingularSystem { pivot: pivot_value });
        }

        if pivot_row != k {
            for col in 0..n {
                let tmp = a[[k, col]];
                a[[k, col]] = a[[pivot_row, col]];
                a[[pivot_row, col]] = tmp;
            }
            permutation.swap(k, pivot_row);
        }

        let pivot = a[[k, k]];

        for i in (k + 1)..n {
            let factor = a[[i, k]] / pivot;
            a[[i, k]] = factor;

            for col in (k + 1)..n {
                a[[i, col]] -= factor * a[[k, col]];
            }
        }
    }

    Ok(LuFactorization {
        combined: a,
        permutation,
    })
}

impl Matrix<Float> {
    /// Solves `self . x = rhs` via LU factorization with partial pivoting.
    ///
    /// Returns `Error::SingularSystem` (with the magnitude of the offending
    /// pivot) if a diagonal pivot falls below tolerance during elimination,
    /// matching the fatal `SingularSystem` error of the solver specification.
    pub fn solve(&self, rhs: &[Float]) -> Result<Vec<Float>, Error> {
        let n = self.nr_rows();
        assert_eq!(rhs.len(), n, "right-hand side length must match matrix size");

        let factorization = lu_factorize(self)?;
        let lu = &factorization.combined;

        // Forward substitution: L . y = P . b (unit diagonal on L).
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut sum = rhs[factorization.permutation[i]];
            for j in 0..i {
                sum -= lu[[i, j]] * y[j];
            }
            y[i] = sum;
        }

        // Back substitution: U . x = y.
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= lu[[i, j]] * x[j];
            }
            x[i] = sum / lu[[i, i]];
        }

        Ok(x)
    }
}
