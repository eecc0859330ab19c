//! Generalized Gaussian elimination.
//!
//! A single row-reduction routine backs determinant, rank, inverse and
//! solve. Callers choose between forward (row-echelon) and full (reduced
//! row-echelon) reduction, and whether a pivot below [`EPSILON`] is an
//! error or just skips its column. An optional auxiliary matrix receives
//! every row operation applied to the main matrix.

use tracing::debug;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;
use crate::EPSILON;

/// Configuration for [`eliminate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EliminationConfig {
    /// Normalize pivots to 1 and clear entries above them.
    pub full_reduction: bool,
    /// Fail with [`MatrixError::Singular`] on a pivot below tolerance
    /// instead of skipping the column.
    pub pivot_failure_is_fatal: bool,
}

impl EliminationConfig {
    /// Row-echelon form, skipping degenerate columns. Used by rank and
    /// determinant.
    #[must_use]
    pub const fn forward() -> Self {
        Self {
            full_reduction: false,
            pivot_failure_is_fatal: false,
        }
    }

    /// Reduced row-echelon form, failing on a degenerate pivot. Used by
    /// inverse and solve.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            full_reduction: true,
            pivot_failure_is_fatal: true,
        }
    }

    /// Returns a copy with the pivot policy replaced.
    #[must_use]
    pub const fn with_fatal_pivots(mut self, fatal: bool) -> Self {
        self.pivot_failure_is_fatal = fatal;
        self
    }
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self::forward()
    }
}

/// Output of [`eliminate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Elimination {
    /// The reduced matrix.
    pub matrix: Matrix,
    /// The auxiliary matrix after the same row operations, if one was given.
    pub auxiliary: Option<Matrix>,
    /// Number of row swaps performed.
    pub swaps: usize,
}

/// Row-reduces `matrix` with partial pivoting.
///
/// Columns are visited left to right while unreduced rows remain. In each
/// column the candidate row (at or below the current pivot row) with the
/// largest absolute entry becomes the pivot; ties go to the lowest index.
/// A column whose best candidate is below [`EPSILON`] either fails or is
/// skipped without consuming a pivot row. Rows below the pivot are cleared;
/// with `full_reduction` the pivot row is also normalized and rows above it
/// are cleared.
///
/// Neither `matrix` nor `auxiliary` is modified.
///
/// # Errors
/// - [`MatrixError::DimensionMismatch`] if `auxiliary` has a different row
///   count than `matrix`.
/// - [`MatrixError::Singular`] if a pivot falls below [`EPSILON`] and
///   `config.pivot_failure_is_fatal` is set.
pub fn eliminate(
    matrix: &Matrix,
    auxiliary: Option<&Matrix>,
    config: EliminationConfig,
) -> MatrixResult<Elimination> {
    if let Some(aux) = auxiliary {
        if aux.rows() != matrix.rows() {
            return Err(MatrixError::mismatch(matrix.shape(), aux.shape()));
        }
    }

    let mut m = matrix.clone();
    let mut aux = auxiliary.cloned();
    let num_rows = m.rows();
    let mut pivot_row = 0;
    let mut swaps = 0;

    for col in 0..m.cols() {
        if pivot_row == num_rows {
            break;
        }

        let best = find_pivot(&m, pivot_row, col);
        let best_abs = m[(best, col)].abs();

        if best_abs < EPSILON {
            if config.pivot_failure_is_fatal {
                debug!(column = col, pivot = best_abs, "singular pivot");
                return Err(MatrixError::Singular { column: col });
            }
            debug!(column = col, "skipping column without usable pivot");
            continue;
        }

        if best != pivot_row {
            swap_rows(&mut m, aux.as_mut(), pivot_row, best);
            swaps += 1;
        }

        let pivot = m[(pivot_row, col)];
        for k in pivot_row + 1..num_rows {
            let factor = -m[(k, col)] / pivot;
            add_scaled_row(&mut m, aux.as_mut(), k, pivot_row, factor);
        }

        if config.full_reduction {
            m.scale_row(pivot_row, pivot);
            if let Some(aux) = aux.as_mut() {
                aux.scale_row(pivot_row, pivot);
            }
            for k in 0..pivot_row {
                let factor = -m[(k, col)];
                add_scaled_row(&mut m, aux.as_mut(), k, pivot_row, factor);
            }
        }

        pivot_row += 1;
    }

    Ok(Elimination {
        matrix: m,
        auxiliary: aux,
        swaps,
    })
}

/// Index of the row in `start..rows` with the largest `|m[row][col]|`.
fn find_pivot(m: &Matrix, start: usize, col: usize) -> usize {
    let mut max_row = start;
    let mut max_val = m[(start, col)].abs();
    for row in start + 1..m.rows() {
        let val = m[(row, col)].abs();
        if val > max_val {
            max_row = row;
            max_val = val;
        }
    }
    max_row
}

fn swap_rows(m: &mut Matrix, aux: Option<&mut Matrix>, i: usize, j: usize) {
    m.swap_rows(i, j);
    if let Some(aux) = aux {
        aux.swap_rows(i, j);
    }
}

fn add_scaled_row(m: &mut Matrix, aux: Option<&mut Matrix>, target: usize, source: usize, scale: f64) {
    m.add_scaled_row(target, source, scale);
    if let Some(aux) = aux {
        aux.add_scaled_row(target, source, scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_forward_is_upper_triangular() {
        let a = m(vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ]);
        let out = eliminate(&a, None, EliminationConfig::forward()).unwrap();
        for i in 0..3 {
            for j in 0..i {
                assert_abs_diff_eq!(out.matrix[(i, j)], 0.0, epsilon = EPSILON);
            }
        }
        assert!(out.auxiliary.is_none());
        // -3 is the largest entry in column 0
        assert_eq!(out.matrix[(0, 0)], -3.0);
        assert!(out.swaps >= 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let a = m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let b = m(vec![vec![1.0], vec![2.0]]);
        let before = (a.clone(), b.clone());
        let out = eliminate(&a, Some(&b), EliminationConfig::full()).unwrap();
        assert_eq!((a, b), before);
        assert_eq!(out.swaps, 1);
        assert_eq!(out.matrix, Matrix::identity(2).unwrap());
        assert_eq!(out.auxiliary, Some(m(vec![vec![2.0], vec![1.0]])));
    }

    #[test]
    fn test_tie_keeps_lowest_row() {
        let a = m(vec![vec![1.0, 2.0], vec![-1.0, 5.0]]);
        let out = eliminate(&a, None, EliminationConfig::forward()).unwrap();
        assert_eq!(out.swaps, 0);
        assert_eq!(out.matrix.row(0), &[1.0, 2.0]);
        assert_eq!(out.matrix.row(1), &[0.0, 7.0]);
    }

    #[test]
    fn test_full_reduction_with_auxiliary() {
        let a = m(vec![vec![2.0, 1.0], vec![1.0, 1.0]]);
        let b = m(vec![vec![1.0], vec![1.0]]);
        let out = eliminate(&a, Some(&b), EliminationConfig::full()).unwrap();
        assert_eq!(out.matrix, Matrix::identity(2).unwrap());
        let x = out.auxiliary.unwrap();
        assert_abs_diff_eq!(x[(0, 0)], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(x[(1, 0)], 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_non_fatal_skips_zero_column() {
        let a = m(vec![vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]]);
        let out = eliminate(&a, None, EliminationConfig::forward()).unwrap();
        // The skipped column does not use up row 0.
        assert_eq!(out.matrix.row(0), &[0.0, 2.0, 3.0]);
        assert_eq!(out.matrix.row(1), &[0.0, 0.0, 0.5]);
        assert_eq!(out.matrix.row(2), &[0.0, 0.0, 0.0]);
        assert_eq!(out.swaps, 1);
    }

    #[test]
    fn test_skipped_column_keeps_pivot_row() {
        let a = m(vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        let out = eliminate(&a, None, EliminationConfig::forward()).unwrap();
        assert_eq!(out.matrix.row(0), &[0.0, 1.0]);
        assert_eq!(out.matrix.row(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_fatal_reports_column() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let err = eliminate(&a, None, EliminationConfig::full()).unwrap_err();
        assert_eq!(err, MatrixError::Singular { column: 1 });

        let forward_fatal = EliminationConfig::forward().with_fatal_pivots(true);
        assert!(eliminate(&a, None, forward_fatal).is_err());
    }

    #[test]
    fn test_rectangular_wide() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 7.0]]);
        let out = eliminate(&a, None, EliminationConfig::forward()).unwrap();
        assert_eq!(out.matrix.row(0), &[2.0, 4.0, 7.0]);
        assert_abs_diff_eq!(out.matrix[(1, 2)], -0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_auxiliary_row_mismatch() {
        let a = Matrix::identity(2).unwrap();
        let b = Matrix::new(3, 1).unwrap();
        assert_eq!(
            eliminate(&a, Some(&b), EliminationConfig::full()),
            Err(MatrixError::DimensionMismatch {
                left: (2, 2),
                right: (3, 1)
            })
        );
    }
}
