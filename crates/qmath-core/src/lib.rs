//! `qmath-core`: complex numbers and dense complex matrices.
//!
//! Provides the [`Complex`] value type, the row-major [`Matrix`] built on it,
//! and the [`gates`] needed to write small quantum-circuit state-vector
//! computations. The umbrella `qmath` crate re-exports everything here.
//!
//! # Design
//!
//! - Matrix arithmetic is expressed entirely through [`Complex`] arithmetic.
//! - Operators (`+`, `-`, `*`) panic on shape mismatch; the named methods
//!   (`add_checked`, `sub_checked`, `matmul`) return [`Result`].
//! - Results are always freshly allocated; operands are never mutated.

pub mod complex;
pub mod config;
pub mod error;
pub mod gates;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use complex::Complex;
pub use config::TensorProductMode;
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use qmath_core::prelude::*;`
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::config::TensorProductMode;
    pub use crate::error::{CoreError, Result};
    pub use crate::gates;
    pub use crate::matrix::Matrix;
}
