//! Error types for matrix operations.

use thiserror::Error;

/// Errors that can occur during matrix construction, access, or arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Index outside the matrix extent.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: first matrix is {left:?}, second matrix is {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand as (rows, cols).
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols).
        right: (usize, usize),
    },

    /// Non-positive row or column count requested.
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Element count at or above the hard ceiling.
    #[error("matrix too large: {elements} elements (limit is {limit})", limit = crate::MAX_ELEMENTS)]
    TooLarge {
        /// Requested element count, saturated on overflow.
        elements: usize,
    },

    /// Square-only operation requested on a non-square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// A pivot fell below tolerance where that is not allowed.
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular {
        /// Pivot column at which elimination failed.
        column: usize,
    },
}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_both_shapes() {
        let err = MatrixError::mismatch((2, 3), (4, 1));
        assert_eq!(
            err.to_string(),
            "dimension mismatch: first matrix is (2, 3), second matrix is (4, 1)"
        );
    }

    #[test]
    fn test_too_large_message() {
        let err = MatrixError::TooLarge {
            elements: 10_000_000,
        };
        assert_eq!(
            err.to_string(),
            "matrix too large: 10000000 elements (limit is 10000000)"
        );
    }
}
