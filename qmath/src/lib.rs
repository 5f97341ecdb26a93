//! # qmath
//!
//! Complex numbers and dense complex matrices for small quantum-circuit
//! computations.
//!
//! One `use qmath::prelude::*;` gives you [`Complex`](qmath_core::Complex),
//! [`Matrix`](qmath_core::Matrix), the standard gates and the error type.
//!
//! The `qmath-demo` binary in this crate prints a few worked examples; run it
//! with `--help` for the list.

pub use qmath_core as core;

/// Glob-import convenience: `use qmath::prelude::*;`
pub mod prelude {
    pub use qmath_core::prelude::*;
}
