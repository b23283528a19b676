//! # Dense Matrix Core Library
//!
//! Provides a validated, rectangular dense matrix value type and its
//! elementwise operations (scalar multiply, map, matrix addition).
//!
//! Construction always runs the full shape/type validation, element access
//! is bounds-checked, and every arithmetic operation returns a fresh matrix
//! so the operands stay untouched; `set_at` is the single in-place mutation
//! point. See [`DenseMatrix`] for the contract of each operation.

// Declare modules
pub mod error;
pub mod json;
pub mod matrix;
pub mod traits;

// Re-export public types
pub use error::{MatrixError, Result};
pub use matrix::DenseMatrix;
pub use traits::Matrix;
