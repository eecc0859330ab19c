//! Dense real matrix stored in row-major order.
//!
//! Every fallible operation returns a [`MatrixResult`]; arithmetic always
//! produces a fresh matrix and leaves its operands untouched.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use tracing::warn;

use crate::error::{MatrixError, MatrixResult};
use crate::{MAX_ELEMENTS, WARN_ELEMENTS};

/// Dense `f64` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a new matrix filled with zeros.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimensions`] if either dimension is zero,
    /// [`MatrixError::TooLarge`] if the element count reaches [`MAX_ELEMENTS`].
    pub fn new(num_rows: usize, num_cols: usize) -> MatrixResult<Self> {
        Self::filled(num_rows, num_cols, 0.0)
    }

    /// Creates a new matrix with every entry set to `value`.
    ///
    /// # Errors
    /// Same as [`Matrix::new`].
    pub fn filled(num_rows: usize, num_cols: usize, value: f64) -> MatrixResult<Self> {
        let elements = checked_elements(num_rows, num_cols)?;
        Ok(Self {
            data: vec![value; elements],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimensions`] if `rows` is empty, the first row is
    /// empty, or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(MatrixError::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            });
        }
        checked_elements(num_rows, num_cols)?;
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Wraps row-major data whose shape is already known to be valid.
    pub(crate) fn from_parts(num_rows: usize, num_cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimensions`] if `n` is zero.
    pub fn identity(n: usize) -> MatrixResult<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a constructed matrix has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row < self.num_rows && col < self.num_cols {
            Ok(row * self.num_cols + col)
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns the entry at (row, col).
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrites the entry at (row, col).
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    /// If `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    ///
    /// # Panics
    /// If either row is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    ///
    /// # Panics
    /// If either row is out of range.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: f64) {
        for k in 0..self.num_cols {
            let val = self[(source, k)] * scale;
            self[(target, k)] += val;
        }
    }

    /// Divides every entry of a row by `divisor`.
    ///
    /// # Panics
    /// If `row` is out of range.
    pub fn scale_row(&mut self, row: usize, divisor: f64) {
        for k in 0..self.num_cols {
            self[(row, k)] /= divisor;
        }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> MatrixResult<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::mismatch(self.shape(), other.shape()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless both shapes are identical.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless both shapes are identical.
    pub fn subtract(&self, other: &Self) -> MatrixResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.multiply_scalar(-1.0)
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> MatrixResult<Self> {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::mismatch(self.shape(), other.shape()));
        }

        let mut result = Self::new(self.num_rows, other.num_cols)?;
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = 0.0;
                for k in 0..self.num_cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)]);
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Horizontal concatenation `[self | other]`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless both have the same row count.
    pub fn augment(&self, other: &Self) -> MatrixResult<Self> {
        if self.num_rows != other.num_rows {
            return Err(MatrixError::mismatch(self.shape(), other.shape()));
        }
        let num_cols = self.num_cols + other.num_cols;
        checked_elements(self.num_rows, num_cols)?;

        let mut data = Vec::with_capacity(self.num_rows * num_cols);
        for i in 0..self.num_rows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(i));
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols,
        })
    }

    /// Copies the first `num_rows` rows into a new matrix.
    pub(crate) fn top_rows(&self, num_rows: usize) -> MatrixResult<Self> {
        let mut result = Self::new(num_rows, self.num_cols)?;
        let end = num_rows * self.num_cols;
        result.data.copy_from_slice(&self.data[..end]);
        Ok(result)
    }

    /// Copies the column block starting at `start_col` into a new matrix.
    pub(crate) fn columns_from(&self, start_col: usize) -> MatrixResult<Self> {
        debug_assert!(start_col < self.num_cols, "empty column block");
        let width = self.num_cols - start_col;
        let mut result = Self::new(self.num_rows, width)?;
        for i in 0..self.num_rows {
            let row = self.row(i);
            result.data[i * width..(i + 1) * width].copy_from_slice(&row[start_col..]);
        }
        Ok(result)
    }
}

/// Validates dimensions and returns the element count.
fn checked_elements(num_rows: usize, num_cols: usize) -> MatrixResult<usize> {
    if num_rows == 0 || num_cols == 0 {
        return Err(MatrixError::InvalidDimensions {
            rows: num_rows,
            cols: num_cols,
        });
    }
    let elements = num_rows.saturating_mul(num_cols);
    if elements >= MAX_ELEMENTS {
        return Err(MatrixError::TooLarge { elements });
    }
    if elements >= WARN_ELEMENTS {
        warn!(
            rows = num_rows,
            cols = num_cols,
            elements,
            "large matrix may slow down performance"
        );
    }
    Ok(elements)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        &mut self.data[row * self.num_cols + col]
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.multiply_scalar(scalar)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.multiply_scalar(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}

/// Renders each row as `|  1.000|  2.000|`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows {
            write!(f, "|")?;
            for value in self.row(i) {
                write!(f, "{value:>7.3}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
