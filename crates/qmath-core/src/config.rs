//! Library-wide settings: tensor-product indexing convention and display
//! defaults.

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Decimal places used by `Display` for [`Complex`](crate::Complex) and
/// [`Matrix`](crate::Matrix) when the formatter carries no precision.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// Largest bit string accepted by [`gates::ket`](crate::gates::ket); the
/// state vector has `2^n` elements.
pub const MAX_BASIS_QUBITS: usize = 20;

/// Index convention used by [`Matrix::tensor_product_with`](crate::Matrix::tensor_product_with).
///
/// For a left operand `A` and right operand `B`, element `(i, j)` of the
/// result is `A[p, q] * B[i % B.rows, j % B.cols]`, where `(p, q)` is:
///
/// | Mode | `p` | `q` |
/// |------|-----|-----|
/// | `Kronecker` | `i / B.rows` | `j / B.cols` |
/// | `Reference` | `i / A.rows` | `j / A.cols` |
///
/// The two agree whenever `A` and `B` have the same shape, which covers
/// products of equally sized gates or of single-qubit kets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TensorProductMode {
    /// The textbook Kronecker product.
    #[default]
    Kronecker,
    /// Block lookup scaled by the left operand's own shape. Lookups that
    /// fall outside the left operand return
    /// [`CoreError::IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds)
    /// rather than reading a neighbouring row.
    Reference,
}

impl fmt::Display for TensorProductMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kronecker => write!(f, "kronecker"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

impl FromStr for TensorProductMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kronecker" | "kron" => Ok(Self::Kronecker),
            "reference" | "ref" => Ok(Self::Reference),
            _ => Err(CoreError::InvalidArgument {
                reason: "tensor product mode must be `kronecker` or `reference`",
            }),
        }
    }
}
