use crate::error::{MatrixError, Result};
use crate::traits::Matrix;
use num_traits::Float;
use std::fmt::Debug;

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// The backing store is exclusively owned: operations that produce a new
/// matrix (`multiply`, `map`, `add_matrix`) allocate a fresh grid and never
/// alias the operands. `set_at` is the single in-place mutation point.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T = f64> {
    /// Row-major cell values; `values[row * cols + col]`.
    values: Vec<T>,
    /// Number of rows.
    rows: usize,
    /// Number of columns. Zero only when `rows` is zero.
    cols: usize,
}

impl<T: Float + Debug> DenseMatrix<T> {
    /// Creates a new DenseMatrix from a list of rows.
    ///
    /// Validation runs in a single pass over the rows, and within each row
    /// shape checks run before element checks:
    /// 1. the first row fixes the expected column count;
    /// 2. an empty row is rejected (a matrix with zero columns is invalid);
    /// 3. a row whose length differs from the first row's is rejected;
    /// 4. a non-finite cell (NaN or infinity) is rejected.
    ///
    /// An empty `grid` is permitted and yields a 0x0 matrix.
    pub fn from_rows(grid: Vec<Vec<T>>) -> Result<Self> {
        let mut expected_cols = None;
        for row in &grid {
            let cols = *expected_cols.get_or_insert(row.len());
            if row.is_empty() {
                return Err(MatrixError::InvalidData(
                    "Data is empty (no data in columns)".to_string(),
                ));
            }
            if row.len() != cols {
                return Err(MatrixError::InvalidData(
                    "Rows in data are not all of the same size".to_string(),
                ));
            }
            for value in row {
                if !value.is_finite() {
                    return Err(MatrixError::InvalidData(
                        "Values in the matrix are not all of numeric type".to_string(),
                    ));
                }
            }
        }

        let rows = grid.len();
        let cols = expected_cols.unwrap_or(0);
        let values = grid.into_iter().flatten().collect();
        log::trace!("Constructed {}x{} dense matrix", rows, cols);

        Ok(DenseMatrix { values, rows, cols })
    }

    /// Creates a matrix of the given dimensions with every cell set to zero.
    ///
    /// The grid is built and then constructed through the same validated
    /// path as [`from_rows`](Self::from_rows), so `zeros(r, 0)` with
    /// `r > 0` is rejected like any other zero-width row, and `zeros(0, c)`
    /// yields the permitted empty matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let grid = vec![vec![T::zero(); cols]; rows];
        Self::from_rows(grid)
    }

    /// Returns the dimensions of the matrix (rows, cols).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true when the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Checks whether both matrices share the same dimensions.
    pub fn is_same_size(&self, other: &DenseMatrix<T>) -> bool {
        self.dims() == other.dims()
    }

    /// Returns a slice containing all cell values in row-major order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the row at `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfBound(format!(
                "Row index {} is out of bound for {} rows",
                row, self.rows
            )));
        }
        let start = row * self.cols;
        Ok(&self.values[start..start + self.cols])
    }

    /// Gets the value at a specific row and column.
    pub fn get_at(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.values[row * self.cols + col])
    }

    /// Sets the value at a specific row and column, in place.
    ///
    /// Returns the receiver so calls can be chained. The cell is either
    /// fully overwritten or, on a bounds or numeric violation, left
    /// untouched. Dimensions are unaffected.
    pub fn set_at(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self> {
        self.check_bounds(row, col)?;
        if !value.is_finite() {
            return Err(MatrixError::NotNumeric(
                "Value is not a numeric".to_string(),
            ));
        }
        self.values[row * self.cols + col] = value;
        Ok(self)
    }

    /// Multiplies every cell by `factor`, returning a new matrix.
    ///
    /// The products follow the host numeric type's native multiplication
    /// semantics; no finiteness check is applied to the results.
    pub fn multiply(&self, factor: T) -> Result<Self> {
        if !factor.is_finite() {
            return Err(MatrixError::NotNumeric(
                "Value is not a numeric".to_string(),
            ));
        }
        let values = self.values.iter().map(|&v| v * factor).collect();
        Ok(DenseMatrix {
            values,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Applies `f` to every cell in row-major order, returning a new matrix.
    ///
    /// The call is all-or-nothing: if `f` returns a non-finite value for any
    /// cell, the partial result is discarded and an error is returned.
    pub fn map<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(T) -> T,
    {
        let mut values = Vec::with_capacity(self.values.len());
        for &v in &self.values {
            let mapped = f(v);
            if !mapped.is_finite() {
                return Err(MatrixError::NotNumeric(
                    "Value returned by map function is not a numeric".to_string(),
                ));
            }
            values.push(mapped);
        }
        Ok(DenseMatrix {
            values,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds `other` elementwise, returning a new matrix.
    ///
    /// Both operands must share the same dimensions. The result is filled
    /// through [`set_at`](Self::set_at), so each written sum passes the same
    /// bounds and numeric checks as ordinary mutation; neither operand is
    /// touched.
    pub fn add_matrix(&self, other: &DenseMatrix<T>) -> Result<Self> {
        if !self.is_same_size(other) {
            return Err(MatrixError::InvalidOperation(
                "Matrix is not of the same size".to_string(),
            ));
        }

        let mut total = DenseMatrix::zeros(self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                total.set_at(i, j, self.get_at(i, j)? + other.get_at(i, j)?)?;
            }
        }

        Ok(total)
    }

    /// Validates that a row and column index fall inside the matrix bounds.
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBound(format!(
                "Either the row index ({}) or the column index ({}) is out of bound for a {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

// Implement the generic Matrix trait for the dense CPU version
impl<T: Float + Debug> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square(), is_same_size() are provided by default impls
}
