//! Matrix creation helpers.

use crate::complex::Complex;

use super::Matrix;

impl Matrix {
    /// Create a matrix filled with `0 + 0i`.
    ///
    /// ```
    /// # use qmath_core::{Complex, Matrix};
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|z| *z == Complex::ZERO));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("shape ({rows}, {cols}) overflows usize");
        };
        Self {
            data: vec![Complex::ZERO; len],
            rows,
            cols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Complex::ONE;
        }
        m
    }

    /// Create a matrix from nested rows.
    ///
    /// ```
    /// # use qmath_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// assert_eq!(m.shape(), (3, 2));
    /// ```
    pub fn from_rows<E, const N: usize>(rows: &[[E; N]]) -> Self
    where
        E: Copy + Into<Complex>,
    {
        Self {
            data: rows.iter().flatten().map(|&v| v.into()).collect(),
            rows: rows.len(),
            cols: N,
        }
    }

    /// Create an `n x 1` column vector (a ket).
    pub fn column_vector<E: Into<Complex>>(elements: Vec<E>) -> Self {
        let rows = elements.len();
        Self {
            data: elements.into_iter().map(Into::into).collect(),
            rows,
            cols: 1,
        }
    }

    /// Create a `1 x n` row vector.
    pub fn row_vector<E: Into<Complex>>(elements: Vec<E>) -> Self {
        let cols = elements.len();
        Self {
            data: elements.into_iter().map(Into::into).collect(),
            rows: 1,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.len(), 12);
        assert!(m.iter().all(|z| z.is_zero()));
    }

    #[test]
    fn test_zeros_empty() {
        let m = Matrix::zeros(0, 3);
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 3));
    }

    #[test]
    fn test_zeros_wide_but_empty() {
        let m = Matrix::zeros(usize::MAX, 0);
        assert_eq!(m.shape(), (usize::MAX, 0));
        assert!(m.is_empty());
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_zeros_overflowing_shape() {
        let _ = Matrix::zeros(usize::MAX / 2 + 1, 2);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        assert_eq!(m.shape(), (3, 3));
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { Complex::ONE } else { Complex::ZERO };
                assert_eq!(*m.get(r, c).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m, Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap());
    }

    #[test]
    fn test_vectors() {
        let ket = Matrix::column_vector(vec![1.0, 0.0]);
        assert_eq!(ket.shape(), (2, 1));
        let bra = Matrix::row_vector(vec![Complex::ONE, Complex::I]);
        assert_eq!(bra.shape(), (1, 2));
        assert_eq!(bra.as_slice()[1], Complex::I);
    }
}
