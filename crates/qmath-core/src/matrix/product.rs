//! Matrix multiplication and tensor (Kronecker) products.

use core::ops::Mul;

use log::{debug, warn};

use crate::complex::Complex;
use crate::config::TensorProductMode;
use crate::error::{CoreError, Result};

use super::Matrix;

impl Matrix {
    /// Matrix product `self · other`.
    ///
    /// `self` must be `[m, k]` and `other` `[k, n]`; the result is `[m, n]`.
    /// Each element is accumulated from zero over `k` in increasing order.
    /// Returns [`CoreError::DimensionMismatch`] if `self.cols != other.rows`,
    /// and [`CoreError::InvalidArgument`] if `m * n` overflows `usize`.
    ///
    /// ```
    /// # use qmath_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.matmul(&b).unwrap(), Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]));
    /// ```
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(CoreError::DimensionMismatch {
                op: "matmul",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let (m, k, n) = (self.rows, self.cols, other.cols);
        debug!("matmul ({m}, {k}) x ({k}, {n})");

        let len = m.checked_mul(n).ok_or(CoreError::InvalidArgument {
            reason: "matrix product shape overflows usize",
        })?;
        let mut data = Vec::with_capacity(len);
        if len == 0 {
            return Ok(Matrix {
                data,
                rows: m,
                cols: n,
            });
        }
        // ijk loop order (row-major friendly for both operands)
        for i in 0..m {
            let a_row = i * k;
            for j in 0..n {
                let mut sum = Complex::ZERO;
                for p in 0..k {
                    sum += self.data[a_row + p] * other.data[p * n + j];
                }
                data.push(sum);
            }
        }

        Ok(Matrix {
            data,
            rows: m,
            cols: n,
        })
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// The result has shape `(self.rows * other.rows, self.cols * other.cols)`
    /// and element `(i, j)` equals
    /// `self[i / other.rows, j / other.cols] * other[i % other.rows, j % other.cols]`.
    ///
    /// ```
    /// # use qmath_core::{Complex, Matrix};
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::identity(2);
    /// let k = a.kron(&b);
    /// assert_eq!(k.shape(), (4, 4));
    /// assert_eq!(*k.get(2, 0).unwrap(), Complex::new(3.0, 0.0));
    /// assert_eq!(*k.get(2, 1).unwrap(), Complex::ZERO);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the result shape overflows `usize`. Use
    /// [`tensor_product_with`](Self::tensor_product_with) to get an error
    /// instead.
    pub fn kron(&self, other: &Matrix) -> Matrix {
        match self.checked_kron(other) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    fn checked_kron(&self, other: &Matrix) -> Result<Matrix> {
        let (rows, cols, len) = self.tensor_shape(other)?;
        debug!(
            "kron ({}, {}) x ({}, {}) -> ({rows}, {cols})",
            self.rows, self.cols, other.rows, other.cols
        );

        let mut data = Vec::with_capacity(len);
        if len > 0 {
            for i in 0..rows {
                for j in 0..cols {
                    let a = self.data[(i / other.rows) * self.cols + j / other.cols];
                    let b = other.data[(i % other.rows) * other.cols + j % other.cols];
                    data.push(a * b);
                }
            }
        }

        Ok(Matrix { data, rows, cols })
    }

    /// `(rows, cols, rows * cols)` of `self ⊗ other`.
    fn tensor_shape(&self, other: &Matrix) -> Result<(usize, usize, usize)> {
        let overflow = CoreError::InvalidArgument {
            reason: "tensor product shape overflows usize",
        };
        let rows = self.rows.checked_mul(other.rows).ok_or(overflow.clone())?;
        let cols = self.cols.checked_mul(other.cols).ok_or(overflow.clone())?;
        let len = rows.checked_mul(cols).ok_or(overflow)?;
        Ok((rows, cols, len))
    }

    /// Tensor product under an explicit [`TensorProductMode`].
    ///
    /// [`TensorProductMode::Kronecker`] computes [`kron`](Self::kron).
    /// [`TensorProductMode::Reference`] looks up the left block by
    /// `(i / self.rows, j / self.cols)`. It matches `kron` only when both
    /// operands have the same shape; otherwise it either yields a different
    /// matrix or the `(row, col)` lookup falls outside `self`. An out-of-range
    /// lookup is always [`CoreError::IndexOutOfBounds`], even where a flat
    /// `row * cols + col` offset would still land inside `self`'s storage
    /// (for example a column past the last one wrapping into the next row).
    ///
    /// Either mode returns [`CoreError::InvalidArgument`] if the result shape
    /// overflows `usize`.
    pub fn tensor_product_with(&self, other: &Matrix, mode: TensorProductMode) -> Result<Matrix> {
        match mode {
            TensorProductMode::Kronecker => self.checked_kron(other),
            TensorProductMode::Reference => self.reference_tensor_product(other),
        }
    }

    fn reference_tensor_product(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            warn!(
                "reference tensor product of {:?} and {:?} differs from kron",
                self.shape(),
                other.shape()
            );
        }

        let (rows, cols, len) = self.tensor_shape(other)?;
        let mut data = Vec::with_capacity(len);
        if len > 0 {
            for i in 0..rows {
                for j in 0..cols {
                    let a = *self.get(i / self.rows, j / self.cols)?;
                    let b = other.data[(i % other.rows) * other.cols + j % other.cols];
                    data.push(a * b);
                }
            }
        }

        Ok(Matrix { data, rows, cols })
    }
}

// ======================================================================
// Matrix * Matrix  (matrix product, panics on mismatch)
// ======================================================================

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}
