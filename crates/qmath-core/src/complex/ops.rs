//! Arithmetic operators for [`Complex`].
//!
//! Implements `Add`, `Sub`, `Mul`, `Div` (and their `*Assign` forms) for:
//! - `Complex op Complex`
//! - `Complex op f64` and `f64 op Complex` (the real operand is coerced first)
//!
//! plus `Neg`, `Sum` and `Product`.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Complex;

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);
        Complex::new(a * c - b * d, a * d + b * c)
    }
}

impl Div for Complex {
    type Output = Complex;

    /// # Panics
    ///
    /// Panics when `rhs` is zero. Use [`Complex::checked_div`] to get an
    /// error instead.
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

// ======================================================================
// Mixed real / complex operands
// ======================================================================

macro_rules! impl_real_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: f64) -> Complex {
                $trait::$method(self, Complex::from(rhs))
            }
        }

        impl $trait<Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                $trait::$method(Complex::from(self), rhs)
            }
        }

        impl $assign_trait for Complex {
            #[inline]
            fn $assign_method(&mut self, rhs: Complex) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl $assign_trait<f64> for Complex {
            #[inline]
            fn $assign_method(&mut self, rhs: f64) {
                *self = $trait::$method(*self, Complex::from(rhs));
            }
        }
    };
}

impl_real_binop!(Add, add, AddAssign, add_assign);
impl_real_binop!(Sub, sub, SubAssign, sub_assign);
impl_real_binop!(Mul, mul, MulAssign, mul_assign);
impl_real_binop!(Div, div, DivAssign, div_assign);

// ======================================================================
// Reductions
// ======================================================================

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, &z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, &z| acc * z)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_sub() {
        let x = Complex::new(1.0, 2.0);
        let y = Complex::new(3.0, -5.0);
        assert_eq!(x + y, Complex::new(4.0, -3.0));
        assert_eq!(x - y, Complex::new(-2.0, 7.0));
    }

    #[test]
    fn test_mul() {
        // (2 + 2i)(4 + 5i) = 8 + 10i + 8i - 10 = -2 + 18i
        let x = Complex::new(2.0, 2.0);
        let y = Complex::new(4.0, 5.0);
        assert_eq!(x * y, Complex::new(-2.0, 18.0));
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_div() {
        let x = Complex::new(-2.0, 18.0);
        let y = Complex::new(4.0, 5.0);
        assert_abs_diff_eq!(x / y, Complex::new(2.0, 2.0), epsilon = 1e-14);
    }

    #[test]
    #[should_panic(expected = "division by zero complex number")]
    fn test_div_by_zero_panics() {
        let _ = Complex::new(1.0, 1.0) / Complex::ZERO;
    }

    #[test]
    fn test_real_operands() {
        let z = Complex::new(1.0, 1.0);
        assert_eq!(z + 1.0, Complex::new(2.0, 1.0));
        assert_eq!(1.0 - z, Complex::new(0.0, -1.0));
        assert_eq!(z * 2.0, Complex::new(2.0, 2.0));
        assert_eq!(2.0 * z, Complex::new(2.0, 2.0));
        assert_eq!(z / 2.0, Complex::new(0.5, 0.5));
    }

    #[test]
    fn test_assign_ops() {
        let mut z = Complex::ZERO;
        z += Complex::new(1.0, 2.0);
        z += 1.0;
        assert_eq!(z, Complex::new(2.0, 2.0));
        z *= Complex::I;
        assert_eq!(z, Complex::new(-2.0, 2.0));
        z -= 1.0;
        z /= 2.0;
        assert_eq!(z, Complex::new(-1.5, 1.0));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Complex::new(1.0, -2.0), Complex::new(-1.0, 2.0));
    }

    #[test]
    fn test_sum_product() {
        let zs = [Complex::new(1.0, 1.0), Complex::new(2.0, -1.0), Complex::ONE];
        assert_eq!(zs.iter().sum::<Complex>(), Complex::new(4.0, 0.0));
        assert_eq!(zs.iter().product::<Complex>(), Complex::new(3.0, 1.0));
        assert_eq!(zs.into_iter().product::<Complex>(), Complex::new(3.0, 1.0));
    }
}
