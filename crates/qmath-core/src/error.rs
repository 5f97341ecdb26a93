use thiserror::Error;

/// All errors returned by `qmath-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Operand shapes are incompatible for the named operation.
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// The element buffer does not hold exactly `rows * cols` values.
    #[error("invalid shape ({rows}, {cols}): expected {} elements, got {len}", element_count(.rows, .cols))]
    InvalidShape { rows: usize, cols: usize, len: usize },

    /// A (row, col) pair, row index or column index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for shape ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A complex component is NaN or infinite.
    #[error("non-finite complex component: {re} + {im}i")]
    NonFinite { re: f64, im: f64 },

    /// Division by the zero complex number.
    #[error("division by zero complex number")]
    DivisionByZero,

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

// Widened so the message is exact even when `rows * cols` overflows `usize`.
fn element_count(rows: &usize, cols: &usize) -> u128 {
    *rows as u128 * *cols as u128
}

/// Convenience alias used throughout `qmath-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
