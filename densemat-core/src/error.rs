use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Construction-time shape or type validation failed.
    #[error("Invalid matrix data: {0}")]
    InvalidData(String),

    /// A scalar argument (or a mapped result) is not a numeric value.
    #[error("Not numeric: {0}")]
    NotNumeric(String),

    /// A row or column index falls outside the matrix bounds.
    #[error("Index out of bound: {0}")]
    IndexOutOfBound(String),

    /// The operation is not defined for the given operands.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
