//! Dense complex matrix with contiguous row-major storage.
//!
//! [`Matrix`] owns a flat `Vec<Complex>` of exactly `rows * cols` elements;
//! element `(r, c)` lives at index `r * cols + c`. Arithmetic never mutates
//! its operands and always allocates a fresh result, and cloning performs a
//! deep copy.

mod create;
mod display;
mod ops;
mod product;

use approx::{AbsDiffEq, RelativeEq};

use crate::complex::Complex;
use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix of [`Complex`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Complex>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major vector.
    ///
    /// Real scalars are coerced to `Complex(v, 0)`. Returns
    /// [`CoreError::InvalidShape`] if `data.len() != rows * cols`, including
    /// when `rows * cols` overflows `usize`.
    ///
    /// ```
    /// # use qmath_core::{Complex, Matrix};
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(*m.get(1, 0).unwrap(), Complex::new(3.0, 0.0));
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec<E: Into<Complex>>(rows: usize, cols: usize, data: Vec<E>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data: data.into_iter().map(Into::into).collect(),
            rows,
            cols,
        })
    }

    /// Create a matrix from a flat row-major slice (copies the data).
    pub fn from_slice<E: Copy + Into<Complex>>(rows: usize, cols: usize, data: &[E]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Complex] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying `Vec<Complex>`.
    #[inline]
    pub fn into_vec(self) -> Vec<Complex> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get a reference to the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Complex> {
        let flat = self.flat_index(row, col)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Complex> {
        let flat = self.flat_index(row, col)?;
        Ok(&mut self.data[flat])
    }

    /// Set the element at `(row, col)`, coercing real scalars.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Complex>) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value.into();
        Ok(())
    }

    /// Copy of row `n` (zero-based), `cols` elements long.
    pub fn row(&self, n: usize) -> Result<Vec<Complex>> {
        if n >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                row: n,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[n * self.cols..(n + 1) * self.cols].to_vec())
    }

    /// Copy of column `n` (zero-based), `rows` elements long.
    pub fn col(&self, n: usize) -> Result<Vec<Complex>> {
        if n >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row: 0,
                col: n,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data.iter().skip(n).step_by(self.cols).copied().collect())
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Complex> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Complex> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(Complex) -> Complex,
    {
        Matrix {
            data: self.data.iter().map(|&z| f(z)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply a function element-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(Complex, Complex) -> Complex,
    {
        self.elementwise("zip_map", other, f)
    }

    pub(crate) fn elementwise<F>(&self, op: &'static str, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(Complex, Complex) -> Complex,
    {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

// ======================================================================
// Tolerance-based comparison
// ======================================================================

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
