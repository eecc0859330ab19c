//! Determinant, rank, inverse and linear-system solving.
//!
//! Each operation is a thin configuration of [`eliminate`] followed by a
//! small amount of post-processing.

use crate::elimination::{eliminate, Elimination, EliminationConfig};
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;
use crate::EPSILON;

/// Classification of a linear system `Ax = b`.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    /// Exactly one solution, as an `A.cols() x 1` column.
    Unique(Matrix),
    /// Infinitely many solutions.
    Infinite,
    /// The system is inconsistent.
    NoSolution,
}

impl SolveOutcome {
    /// Returns true if the system has exactly one solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, SolveOutcome::Unique(_))
    }

    /// Returns the solution vector if it is unique.
    #[must_use]
    pub fn solution(&self) -> Option<&Matrix> {
        match self {
            SolveOutcome::Unique(x) => Some(x),
            _ => None,
        }
    }
}

impl Matrix {
    fn require_square(&self) -> MatrixResult<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    fn forward(&self) -> Elimination {
        // Non-fatal forward elimination without an auxiliary cannot fail.
        match eliminate(self, None, EliminationConfig::forward()) {
            Ok(out) => out,
            Err(_) => unreachable!("non-fatal forward elimination returned an error"),
        }
    }

    /// Row-echelon form as produced by forward elimination.
    #[must_use]
    pub fn forward_echelon(&self) -> Matrix {
        self.forward().matrix
    }

    /// Reduced row-echelon form; columns without a usable pivot are left
    /// unreduced.
    #[must_use]
    pub fn reduced_echelon(&self) -> Matrix {
        let config = EliminationConfig::full().with_fatal_pivots(false);
        match eliminate(self, None, config) {
            Ok(out) => out.matrix,
            Err(_) => unreachable!("non-fatal elimination returned an error"),
        }
    }

    /// Computes the determinant.
    ///
    /// Values within [`EPSILON`] of zero are returned as exactly `0.0`.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] for non-square matrices.
    pub fn determinant(&self) -> MatrixResult<f64> {
        self.require_square()?;
        let Elimination { matrix, swaps, .. } = self.forward();

        let det: f64 = (0..matrix.rows()).map(|i| matrix[(i, i)]).product();
        if det.abs() < EPSILON {
            return Ok(0.0);
        }
        Ok(if swaps % 2 == 1 { -det } else { det })
    }

    /// Number of rows of the row-echelon form with an entry of at least
    /// [`EPSILON`] in absolute value.
    #[must_use]
    pub fn rank(&self) -> usize {
        let echelon = self.forward_echelon();
        (0..echelon.rows())
            .filter(|&i| echelon.row(i).iter().any(|v| v.abs() >= EPSILON))
            .count()
    }

    /// Computes the inverse as the right half of the fully reduced `[A | I]`.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] for non-square matrices.
    /// - [`MatrixError::Singular`] if a pivot falls below tolerance.
    pub fn inverse(&self) -> MatrixResult<Matrix> {
        self.require_square()?;
        let augmented = self.augment(&Matrix::identity(self.rows())?)?;
        // Elimination stops once every row has a pivot, so the identity
        // half never supplies one.
        let out = eliminate(&augmented, None, EliminationConfig::full())?;
        out.matrix.columns_from(self.cols())
    }

    /// Solves `Ax = b` for a single column `b`.
    ///
    /// The system is classified by comparing `rank(A)` with `rank([A | b])`:
    /// an increase means no solution, otherwise a rank below the number of
    /// unknowns means infinitely many.
    ///
    /// # Errors
    /// - [`MatrixError::DimensionMismatch`] unless `b` is `A.rows() x 1`.
    /// - [`MatrixError::Singular`] if the unique-solution reduction meets a
    ///   pivot below tolerance. Rank counts any entry of at least [`EPSILON`]
    ///   after elimination, so a column of entries just below tolerance can
    ///   still classify the system as unique and then fail here.
    pub fn solve(&self, b: &Matrix) -> MatrixResult<SolveOutcome> {
        if b.rows() != self.rows() || b.cols() != 1 {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: b.shape(),
            });
        }

        let rank_a = self.rank();
        let rank_ab = self.augment(b)?.rank();

        if rank_ab > rank_a {
            return Ok(SolveOutcome::NoSolution);
        }
        if rank_a < self.cols() {
            return Ok(SolveOutcome::Infinite);
        }

        let out = eliminate(self, Some(b), EliminationConfig::full())?;
        let Some(reduced) = out.auxiliary else {
            unreachable!("elimination dropped the right-hand side");
        };
        Ok(SolveOutcome::Unique(reduced.top_rows(self.cols())?))
    }
}
