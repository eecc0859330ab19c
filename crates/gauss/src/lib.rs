//! # Gauss
//!
//! Dense real matrices and the operations that fall out of Gaussian
//! elimination: determinant, rank, inverse and linear-system solving.
//!
//! ## Features
//!
//! - **One Kernel**: every derived operation runs through [`linalg::eliminate`]
//! - **Checked Access**: out-of-range indices and incompatible shapes are errors
//! - **Rotations**: axis-aligned 3D rotations in degrees
//! - **Workspaces**: named matrices with plain-text save and load
//!
//! ## Quick Start
//!
//! ```rust
//! use gauss::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![1.0], vec![1.0]]).unwrap();
//! match a.solve(&b).unwrap() {
//!     SolveOutcome::Unique(x) => assert!((x[(1, 0)] - 1.0).abs() < EPSILON),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gauss_linalg as linalg;
pub use gauss_workspace as workspace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gauss_linalg::{
        eliminate, Elimination, EliminationConfig, Matrix, MatrixError, MatrixResult,
        SolveOutcome, EPSILON,
    };
    pub use gauss_workspace::{Workspace, WorkspaceConfig, WorkspaceError, WorkspaceResult};
}
