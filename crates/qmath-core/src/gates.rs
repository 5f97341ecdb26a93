//! Standard quantum gates and computational-basis states.
//!
//! Gates are square [`Matrix`] values; states are column vectors. Multi-qubit
//! operators are assembled with [`Matrix::kron`], with the first qubit as the
//! most significant bit.
//!
//! ```
//! use qmath_core::gates;
//!
//! // CNOT · (H ⊗ I) · |00⟩ = (|00⟩ + |11⟩) / √2
//! let circuit = gates::cnot().matmul(&gates::hadamard().kron(&gates::identity(2))).unwrap();
//! let bell = circuit.matmul(&gates::ket("00").unwrap()).unwrap();
//! assert!((bell.as_slice()[0].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! assert!((bell.as_slice()[3].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! ```

use core::f64::consts::FRAC_1_SQRT_2;

use crate::complex::Complex;
use crate::config::MAX_BASIS_QUBITS;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// `n x n` identity.
pub fn identity(n: usize) -> Matrix {
    Matrix::identity(n)
}

/// Pauli-X (NOT): `[[0, 1], [1, 0]]`.
pub fn pauli_x() -> Matrix {
    Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])
}

/// Pauli-Y: `[[0, -i], [i, 0]]`.
pub fn pauli_y() -> Matrix {
    Matrix::from_rows(&[
        [Complex::ZERO, Complex::new(0.0, -1.0)],
        [Complex::I, Complex::ZERO],
    ])
}

/// Pauli-Z: `[[1, 0], [0, -1]]`.
pub fn pauli_z() -> Matrix {
    Matrix::from_rows(&[[1.0, 0.0], [0.0, -1.0]])
}

/// Hadamard: `[[1, 1], [1, -1]] / √2`.
pub fn hadamard() -> Matrix {
    Matrix::from_rows(&[[1.0, 1.0], [1.0, -1.0]]).scale(FRAC_1_SQRT_2)
}

/// Phase shift `diag(1, e^{iθ})`.
pub fn phase(theta: f64) -> Matrix {
    Matrix::from_rows(&[
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::from_polar(1.0, theta)],
    ])
}

/// Controlled-NOT with the first qubit as control.
#[rustfmt::skip]
pub fn cnot() -> Matrix {
    Matrix::from_rows(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
}

/// Computational-basis column vector for a bit string, e.g. `"01"` is the
/// 4-element vector with a one at index 1.
///
/// Returns [`CoreError::InvalidArgument`] for an empty string, a character
/// other than `0`/`1`, or more than [`MAX_BASIS_QUBITS`] bits.
pub fn ket(bits: &str) -> Result<Matrix> {
    if bits.is_empty() {
        return Err(CoreError::InvalidArgument {
            reason: "basis state needs at least one bit",
        });
    }
    if bits.len() > MAX_BASIS_QUBITS {
        return Err(CoreError::InvalidArgument {
            reason: "basis state has too many qubits",
        });
    }

    let mut index = 0usize;
    for ch in bits.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            _ => {
                return Err(CoreError::InvalidArgument {
                    reason: "basis state bits must be `0` or `1`",
                })
            }
        };
        index = (index << 1) | bit;
    }

    let mut state = Matrix::zeros(1 << bits.len(), 1);
    state.set(index, 0, Complex::ONE)?;
    Ok(state)
}

/// `|0⟩`
pub fn ket0() -> Matrix {
    Matrix::column_vector(vec![1.0, 0.0])
}

/// `|1⟩`
pub fn ket1() -> Matrix {
    Matrix::column_vector(vec![0.0, 1.0])
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    #[test]
    fn test_hadamard_display() {
        assert_eq!(
            hadamard().to_string(),
            "| 0.71 + 0.00i,  0.71 + 0.00i |\n| 0.71 + 0.00i,  -0.71 + 0.00i |"
        );
    }

    #[test]
    fn test_pauli_squares_are_identity() {
        for g in [pauli_x(), pauli_y(), pauli_z()] {
            assert_eq!(g.matmul(&g).unwrap(), identity(2));
        }
        assert_abs_diff_eq!(hadamard().matmul(&hadamard()).unwrap(), identity(2), epsilon = 1e-15);
    }

    #[test]
    fn test_pauli_x_flips() {
        assert_eq!(pauli_x().matmul(&ket0()).unwrap(), ket1());
        assert_eq!(pauli_x().matmul(&ket1()).unwrap(), ket0());
    }

    #[test]
    fn test_phase() {
        let s = phase(PI / 2.0);
        let out = s.matmul(&ket1()).unwrap();
        assert_abs_diff_eq!(out.as_slice()[1], Complex::I, epsilon = 1e-15);
        assert_eq!(phase(0.0), identity(2));
    }

    #[test]
    fn test_cnot_truth_table() {
        for (input, output) in [("00", "00"), ("01", "01"), ("10", "11"), ("11", "10")] {
            let state = cnot().matmul(&ket(input).unwrap()).unwrap();
            assert_eq!(state, ket(output).unwrap(), "CNOT |{input}>");
        }
    }

    #[test]
    fn test_ket() {
        assert_eq!(ket("0").unwrap(), ket0());
        assert_eq!(ket("1").unwrap(), ket1());
        let k = ket("011").unwrap();
        assert_eq!(k.shape(), (8, 1));
        assert_eq!(k.as_slice()[3], Complex::ONE);
        assert_eq!(k.iter().filter(|z| **z == Complex::ONE).count(), 1);
        assert_eq!(ket("10").unwrap(), ket1().kron(&ket0()));
    }

    #[test]
    fn test_ket_invalid() {
        assert!(ket("").is_err());
        assert!(ket("012").is_err());
        assert!(ket(&"0".repeat(MAX_BASIS_QUBITS + 1)).is_err());
    }
}
