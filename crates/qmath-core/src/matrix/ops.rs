//! Element-wise and scalar arithmetic for [`Matrix`].
//!
//! Implements `Add`, `Sub` for `Matrix op Matrix` (same shape, panics on
//! mismatch), `Mul` by a `Complex` or `f64` scalar, and `Neg`. The
//! `*_checked` methods return `Err` instead of panicking.

use core::ops::{Add, Mul, Neg, Sub};

use crate::complex::Complex;
use crate::error::Result;

use super::Matrix;

// ======================================================================
// Matrix + Matrix  (element-wise, same shape, panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Matrix {
                    data,
                    rows: self.rows,
                    cols: self.cols,
                }
            }
        }

        impl $trait for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

// ======================================================================
// Matrix * scalar
// ======================================================================

macro_rules! impl_scalar_mul {
    ($scalar:ty) => {
        impl Mul<$scalar> for &Matrix {
            type Output = Matrix;

            fn mul(self, rhs: $scalar) -> Matrix {
                self.scale(rhs)
            }
        }

        impl Mul<$scalar> for Matrix {
            type Output = Matrix;

            fn mul(self, rhs: $scalar) -> Matrix {
                self.scale(rhs)
            }
        }
    };
}

impl_scalar_mul!(Complex);
impl_scalar_mul!(f64);

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|z| -z)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}

// ======================================================================
// Named (Result-returning) arithmetic
// ======================================================================

impl Matrix {
    /// Element-wise addition, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise("add", other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise("sub", other, |a, b| a - b)
    }

    /// Multiply every element by `k`, computed as `element * k`.
    ///
    /// ```
    /// # use qmath_core::{Complex, Matrix};
    /// let m = Matrix::from_rows(&[[1.0, 2.0]]).scale(Complex::I);
    /// assert_eq!(m.as_slice(), &[Complex::new(0.0, 1.0), Complex::new(0.0, 2.0)]);
    /// ```
    pub fn scale(&self, k: impl Into<Complex>) -> Matrix {
        let k = k.into();
        self.map(|z| z * k)
    }

    /// Element-wise complex conjugate.
    pub fn conj(&self) -> Matrix {
        self.map(Complex::conj)
    }
}
