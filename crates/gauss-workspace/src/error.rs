//! Error types for workspace operations.

use std::io;

use gauss_linalg::MatrixError;

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Errors raised by [`Workspace`](crate::Workspace) operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// No matrix is stored under the name.
    #[error("matrix '{0}' not found in workspace")]
    NotFound(String),

    /// Names must be non-empty and free of whitespace so they survive a
    /// save/load cycle.
    #[error("invalid matrix name {0:?}")]
    InvalidName(String),

    /// Replacement values do not match the matrix size.
    #[error("matrix '{name}' has {expected} elements, got {actual} values")]
    ValueCount {
        /// Target matrix.
        name: String,
        /// `rows * cols` of the target.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// The underlying matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Reading or writing a workspace file failed.
    #[error("workspace file error: {0}")]
    Io(#[from] io::Error),

    /// A workspace file is malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending token.
        line: usize,
        /// What was wrong.
        reason: String,
    },
}
