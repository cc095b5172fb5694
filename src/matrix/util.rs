use crate::dtype::DType;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl Matrix {
    /// Apply a function to every element, producing a new matrix of
    /// precision `dtype` with the same extents.
    ///
    /// ```
    /// use poisson_variance::{DType, Matrix};
    /// let m = Matrix::from_rows(2, 2, vec![1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map_to(DType::Float32, f64::sqrt);
    /// assert_eq!(r.dtype(), DType::Float32);
    /// assert_eq!(r.get(1, 1), 4.0);
    /// ```
    pub fn map_to(&self, dtype: DType, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            data: self.data.map_to(dtype, f),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Apply a function to every element in place, in linear order.
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        self.data.map_in_place(f);
    }
}
