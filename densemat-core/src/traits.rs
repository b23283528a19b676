use num_traits::Float;
use std::fmt::Debug;

/// Generic trait representing a matrix.
/// Implementations can be dense or sparse, but are always CPU-resident here.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f32, f64).
    type Value: Float + Debug;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Checks if two matrices share the same dimensions.
    fn is_same_size<M: Matrix>(&self, other: &M) -> bool {
        self.dims() == other.dims()
    }
}
