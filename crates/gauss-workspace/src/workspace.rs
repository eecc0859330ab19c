//! A named collection of matrices.
//!
//! Every operation that produces a matrix stores it under a caller-chosen
//! result name, replacing whatever was there. Operations compute their
//! result before touching the map, so a failing call leaves the workspace
//! as it was.

use std::collections::btree_map::{self, BTreeMap};

use gauss_linalg::{Matrix, MatrixResult, SolveOutcome};
use tracing::debug;

use crate::error::{WorkspaceError, WorkspaceResult};

/// Matrices indexed by name, iterated in name order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workspace {
    matrices: BTreeMap<String, Matrix>,
}

fn check_name(name: &str) -> WorkspaceResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(WorkspaceError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored matrices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Returns true if no matrices are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Returns true if a matrix is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.matrices.contains_key(name)
    }

    /// Iterates over `(name, matrix)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Matrix> {
        self.matrices.iter()
    }

    /// Removes every matrix.
    pub fn clear(&mut self) {
        self.matrices.clear();
    }

    /// Stores `matrix` under `name`, returning the matrix it replaced.
    ///
    /// # Errors
    /// [`WorkspaceError::InvalidName`] if `name` is empty or contains whitespace.
    pub fn insert(&mut self, name: &str, matrix: Matrix) -> WorkspaceResult<Option<Matrix>> {
        check_name(name)?;
        Ok(self.matrices.insert(name.to_string(), matrix))
    }

    /// Creates a `rows x cols` matrix filled with `fill` and stores it.
    ///
    /// # Errors
    /// Invalid names, and the construction errors of [`Matrix::filled`].
    pub fn create(&mut self, name: &str, rows: usize, cols: usize, fill: f64) -> WorkspaceResult<()> {
        check_name(name)?;
        let matrix = Matrix::filled(rows, cols, fill)?;
        debug!(name, rows, cols, "created matrix");
        self.matrices.insert(name.to_string(), matrix);
        Ok(())
    }

    /// Looks up a matrix.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn get(&self, name: &str) -> WorkspaceResult<&Matrix> {
        self.matrices
            .get(name)
            .ok_or_else(|| WorkspaceError::NotFound(name.to_string()))
    }

    /// Looks up a matrix for modification.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn get_mut(&mut self, name: &str) -> WorkspaceResult<&mut Matrix> {
        self.matrices
            .get_mut(name)
            .ok_or_else(|| WorkspaceError::NotFound(name.to_string()))
    }

    /// Removes and returns a matrix.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn delete(&mut self, name: &str) -> WorkspaceResult<Matrix> {
        self.matrices
            .remove(name)
            .ok_or_else(|| WorkspaceError::NotFound(name.to_string()))
    }

    /// Overwrites every value of an existing matrix from row-major `values`.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent, [`WorkspaceError::ValueCount`]
    /// if `values` does not hold exactly `rows * cols` entries.
    pub fn assign(&mut self, name: &str, values: &[f64]) -> WorkspaceResult<()> {
        let matrix = self.get_mut(name)?;
        if values.len() != matrix.len() {
            return Err(WorkspaceError::ValueCount {
                name: name.to_string(),
                expected: matrix.len(),
                actual: values.len(),
            });
        }
        let cols = matrix.cols();
        for (i, &value) in values.iter().enumerate() {
            matrix.set(i / cols, i % cols, value)?;
        }
        Ok(())
    }

    /// Replaces a matrix with its transpose.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn transpose(&mut self, name: &str) -> WorkspaceResult<()> {
        let matrix = self.get_mut(name)?;
        *matrix = matrix.transpose();
        Ok(())
    }

    fn store(&mut self, result: &str, matrix: Matrix) {
        debug!(name = result, rows = matrix.rows(), cols = matrix.cols(), "stored result");
        self.matrices.insert(result.to_string(), matrix);
    }

    fn binary(
        &mut self,
        result: &str,
        lhs: &str,
        rhs: &str,
        op: impl FnOnce(&Matrix, &Matrix) -> MatrixResult<Matrix>,
    ) -> WorkspaceResult<()> {
        check_name(result)?;
        let value = op(self.get(lhs)?, self.get(rhs)?)?;
        self.store(result, value);
        Ok(())
    }

    /// Stores `lhs + rhs` under `result`.
    ///
    /// # Errors
    /// Missing operands (checked `lhs` first) or mismatched shapes.
    pub fn add(&mut self, result: &str, lhs: &str, rhs: &str) -> WorkspaceResult<()> {
        self.binary(result, lhs, rhs, Matrix::add)
    }

    /// Stores `lhs - rhs` under `result`.
    ///
    /// # Errors
    /// Missing operands (checked `lhs` first) or mismatched shapes.
    pub fn subtract(&mut self, result: &str, lhs: &str, rhs: &str) -> WorkspaceResult<()> {
        self.binary(result, lhs, rhs, Matrix::subtract)
    }

    /// Stores `lhs * rhs` under `result`.
    ///
    /// # Errors
    /// Missing operands (checked `lhs` first) or incompatible shapes.
    pub fn multiply(&mut self, result: &str, lhs: &str, rhs: &str) -> WorkspaceResult<()> {
        self.binary(result, lhs, rhs, Matrix::multiply)
    }

    /// Stores `scalar * name` under `result`.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn multiply_scalar(&mut self, result: &str, name: &str, scalar: f64) -> WorkspaceResult<()> {
        check_name(result)?;
        let value = self.get(name)?.multiply_scalar(scalar);
        self.store(result, value);
        Ok(())
    }

    /// Stores the inverse of `name` under `result`.
    ///
    /// # Errors
    /// Missing operand, non-square or singular matrix.
    pub fn inverse(&mut self, result: &str, name: &str) -> WorkspaceResult<()> {
        check_name(result)?;
        let value = self.get(name)?.inverse()?;
        self.store(result, value);
        Ok(())
    }

    /// Rank of a stored matrix.
    ///
    /// # Errors
    /// [`WorkspaceError::NotFound`] if absent.
    pub fn rank(&self, name: &str) -> WorkspaceResult<usize> {
        Ok(self.get(name)?.rank())
    }

    /// Determinant of a stored matrix.
    ///
    /// # Errors
    /// Missing operand or non-square matrix.
    pub fn determinant(&self, name: &str) -> WorkspaceResult<f64> {
        Ok(self.get(name)?.determinant()?)
    }

    /// Solves `a x = b`; a unique solution is also stored under `result`.
    ///
    /// # Errors
    /// Missing operands (checked `a` first) or a `b` that is not a matching
    /// column.
    pub fn solve(&mut self, result: &str, a: &str, b: &str) -> WorkspaceResult<SolveOutcome> {
        check_name(result)?;
        let outcome = self.get(a)?.solve(self.get(b)?)?;
        if let SolveOutcome::Unique(x) = &outcome {
            self.store(result, x.clone());
        }
        Ok(outcome)
    }

    /// Rotates the stored `3 x 1` vector and stores the result.
    ///
    /// # Errors
    /// Missing operand or a vector that is not `3 x 1`.
    pub fn rotate_3d(
        &mut self,
        result: &str,
        vector: &str,
        x_degrees: f64,
        y_degrees: f64,
        z_degrees: f64,
    ) -> WorkspaceResult<()> {
        check_name(result)?;
        let value = Matrix::rotate_3d(self.get(vector)?, x_degrees, y_degrees, z_degrees)?;
        self.store(result, value);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Workspace {
    type Item = (&'a String, &'a Matrix);
    type IntoIter = btree_map::Iter<'a, String, Matrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
