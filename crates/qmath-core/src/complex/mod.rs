//! Double-precision complex numbers.
//!
//! [`Complex`] is a plain `Copy` value: every operation returns a new value
//! and nothing is mutated except through the compound-assignment operators.
//! Real scalars convert into it through [`From`], so any API taking
//! `impl Into<Complex>` accepts `2.0`, `3` or `Complex::new(1.0, -1.0)`.

mod display;
mod ops;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{CoreError, Result};

/// A complex number `re + im·i` with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// `0 + 1i`
    pub const I: Self = Self::new(0.0, 1.0);

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a complex number from its rectangular components.
    ///
    /// ```
    /// # use qmath_core::Complex;
    /// let z = Complex::new(3.0, -4.0);
    /// assert_eq!(z.to_string(), "3.00 + -4.00i");
    /// ```
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number from a magnitude and an angle in radians.
    ///
    /// ```
    /// # use qmath_core::Complex;
    /// let z = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2);
    /// assert!(z.re.abs() < 1e-15);
    /// assert!((z.im - 2.0).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Like [`new`](Self::new), but rejects NaN or infinite components.
    pub fn try_new(re: f64, im: f64) -> Result<Self> {
        let z = Self::new(re, im);
        if z.is_finite() {
            Ok(z)
        } else {
            Err(CoreError::NonFinite { re, im })
        }
    }

    /// Like [`from_polar`](Self::from_polar), but rejects non-finite inputs.
    pub fn try_from_polar(magnitude: f64, angle: f64) -> Result<Self> {
        if !magnitude.is_finite() || !angle.is_finite() {
            return Err(CoreError::NonFinite {
                re: magnitude,
                im: angle,
            });
        }
        Ok(Self::from_polar(magnitude, angle))
    }

    // ------------------------------------------------------------------
    // Scalar properties
    // ------------------------------------------------------------------

    /// Magnitude `sqrt(re² + im²)`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Argument `atan2(im, re)`, in `(-π, π]`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Whether both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    // ------------------------------------------------------------------
    // Division
    // ------------------------------------------------------------------

    /// Divide by `rhs`, returning `Err` instead of panicking when `rhs` is
    /// zero.
    ///
    /// ```
    /// # use qmath_core::Complex;
    /// let q = Complex::new(1.0, 1.0).checked_div(Complex::new(1.0, -1.0)).unwrap();
    /// assert_eq!(q, Complex::I);
    /// assert!(Complex::ONE.checked_div(Complex::ZERO).is_err());
    /// ```
    ///
    /// The quotient is `(self · conj rhs) / |rhs|²`, evaluated with Smith's
    /// scaling so that very small or very large finite divisors neither
    /// underflow to zero nor overflow to infinity.
    pub fn checked_div(self, rhs: impl Into<Complex>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(CoreError::DivisionByZero);
        }
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let denom = c + d * r;
            Ok(Self::new((a + b * r) / denom, (b - a * r) / denom))
        } else {
            let r = c / d;
            let denom = c * r + d;
            Ok(Self::new((a * r + b) / denom, (b * r - a) / denom))
        }
    }

    /// Multiplicative inverse `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub fn recip(self) -> Self {
        Self::ONE / self
    }
}

// ======================================================================
// Scalar coercion
// ======================================================================

macro_rules! impl_from_real {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Complex {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::new(f64::from(v), 0.0)
                }
            }
        )*
    };
}

impl_from_real!(f64, f32, i8, i16, i32, u8, u16, u32);

impl From<i64> for Complex {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::new(v as f64, 0.0)
    }
}

impl From<usize> for Complex {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(v: usize) -> Self {
        Self::new(v as f64, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

// ======================================================================
// Tolerance-based comparison
// ======================================================================

impl AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}
