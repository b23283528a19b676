//! Construction from untyped JSON input.
//!
//! JSON is the one place where a "row" can turn out to be a scalar and a
//! "cell" can turn out to be a string, so the full validation taxonomy of
//! [`MatrixError`] applies here. Checks run row by row, shape before cell
//! types, and conversion funnels into [`DenseMatrix::from_rows`] so the
//! typed path stays authoritative.

use crate::error::{MatrixError, Result};
use crate::matrix::DenseMatrix;
use num_traits::{Float, FromPrimitive};
use serde_json::Value;
use std::fmt::Debug;

impl<T: Float + FromPrimitive + Debug> DenseMatrix<T> {
    /// Creates a new DenseMatrix from a JSON array of row arrays.
    ///
    /// A cell is numeric iff it is a JSON number representable as `T`;
    /// strings, booleans and nulls are rejected even when they look like
    /// numbers.
    pub fn from_json(data: &Value) -> Result<Self> {
        let json_rows = data.as_array().ok_or_else(|| {
            MatrixError::InvalidData("Data is not an array of rows".to_string())
        })?;

        let mut expected_cols = None;
        let mut grid = Vec::with_capacity(json_rows.len());
        for json_row in json_rows {
            let json_row = json_row.as_array().ok_or_else(|| {
                MatrixError::InvalidData(
                    "A row contained in the data is not an array".to_string(),
                )
            })?;

            let cols = *expected_cols.get_or_insert(json_row.len());
            if json_row.is_empty() {
                return Err(MatrixError::InvalidData(
                    "Data is empty (no data in columns)".to_string(),
                ));
            }
            if json_row.len() != cols {
                return Err(MatrixError::InvalidData(
                    "Rows in data are not all of the same size".to_string(),
                ));
            }

            let mut row = Vec::with_capacity(json_row.len());
            for cell in json_row {
                let value = cell.as_number().and_then(number_to_value).ok_or_else(|| {
                    MatrixError::InvalidData(
                        "Values in the matrix are not all of numeric type".to_string(),
                    )
                })?;
                row.push(value);
            }
            grid.push(row);
        }

        Self::from_rows(grid)
    }
}

/// Converts a JSON number to `T`, preferring the integer representations so
/// integral values round-trip without going through text.
fn number_to_value<T: FromPrimitive>(number: &serde_json::Number) -> Option<T> {
    if let Some(i) = number.as_i64() {
        T::from_i64(i)
    } else if let Some(u) = number.as_u64() {
        T::from_u64(u)
    } else {
        number.as_f64().and_then(T::from_f64)
    }
}
