//! Axis-aligned 3D rotations.
//!
//! Angles are given in degrees. Combined rotations apply X first, then Y,
//! then Z: `R = Rz · Ry · Rx`.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

fn rotation_3x3(rows: [[f64; 3]; 3]) -> Matrix {
    Matrix::from_parts(3, 3, rows.concat())
}

impl Matrix {
    /// Rotation by `degrees` about the X axis.
    #[must_use]
    pub fn rotation_x(degrees: f64) -> Matrix {
        let (s, c) = degrees.to_radians().sin_cos();
        rotation_3x3([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation by `degrees` about the Y axis.
    #[must_use]
    pub fn rotation_y(degrees: f64) -> Matrix {
        let (s, c) = degrees.to_radians().sin_cos();
        rotation_3x3([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation by `degrees` about the Z axis.
    #[must_use]
    pub fn rotation_z(degrees: f64) -> Matrix {
        let (s, c) = degrees.to_radians().sin_cos();
        rotation_3x3([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Combined rotation `Rz(z) · Ry(y) · Rx(x)`.
    ///
    /// # Errors
    /// Never fails in practice; the products are all 3x3.
    pub fn rotation_zyx(x_degrees: f64, y_degrees: f64, z_degrees: f64) -> MatrixResult<Matrix> {
        Matrix::rotation_z(z_degrees)
            .multiply(&Matrix::rotation_y(y_degrees))?
            .multiply(&Matrix::rotation_x(x_degrees))
    }

    /// Rotates a `3 x 1` column vector by `Rz · Ry · Rx`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if `vector` is not `3 x 1`.
    pub fn rotate_3d(
        vector: &Matrix,
        x_degrees: f64,
        y_degrees: f64,
        z_degrees: f64,
    ) -> MatrixResult<Matrix> {
        let rotation = Matrix::rotation_zyx(x_degrees, y_degrees, z_degrees)?;
        let rotated = rotation.multiply(vector)?;
        if rotated.cols() != 1 {
            return Err(MatrixError::DimensionMismatch {
                left: rotation.shape(),
                right: vector.shape(),
            });
        }
        Ok(rotated)
    }
}
