//! # gauss-linalg
//!
//! Dense real linear algebra built around one Gaussian-elimination kernel.
//!
//! This crate provides:
//! - A row-major `f64` [`Matrix`] with bounds-checked access and arithmetic
//! - [`eliminate`], a single row-reduction routine with partial pivoting
//! - Determinant, rank, inverse and linear-system solving on top of it
//! - Axis-aligned 3D rotations
//!
//! ## Tolerance
//!
//! A single absolute threshold, [`EPSILON`], decides when a value counts as
//! zero: for pivot selection, for snapping determinants, and for rank. It
//! does not scale with the magnitude of the entries, so matrices with very
//! large or very small values can be misclassified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod derived;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod rotation;

pub use derived::SolveOutcome;
pub use elimination::{eliminate, Elimination, EliminationConfig};
pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;

/// Absolute tolerance below which a value is treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Element count at which construction fails.
pub const MAX_ELEMENTS: usize = 10_000_000;

/// Element count at which construction logs a performance warning.
pub const WARN_ELEMENTS: usize = 1_000_000;

#[cfg(test)]
mod proptests;
