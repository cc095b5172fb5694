mod util;

use crate::buffer::TypedBuffer;
use crate::dtype::DType;
use crate::traits::Element;

/// Buffer length mismatch when assembling a [`Matrix`].
///
/// # Example
///
/// ```
/// use poisson_variance::{Matrix, TypedBuffer};
///
/// let result = Matrix::from_buffer(2, 3, TypedBuffer::from(vec![1.0_f64; 5]));
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Requested `(rows, cols)`.
    pub shape: (usize, usize),
    /// Length of the supplied buffer.
    pub len: usize,
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: buffer of length {} cannot back a {}x{} matrix",
            self.len, self.shape.0, self.shape.1
        )
    }
}

impl std::error::Error for DimensionMismatch {}

/// Dense 2-D numeric matrix with runtime dimensions and element precision.
///
/// Row-major [`TypedBuffer`] storage: element `(i, j)` lives at linear
/// index `i * ncols + j`. A matrix with a zero extent is empty.
///
/// # Examples
///
/// ```
/// use poisson_variance::{DType, Matrix};
///
/// let a = Matrix::from_rows(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.get(0, 1), 2.0);
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a.dtype(), DType::Float64);
///
/// let z = Matrix::zeros(0, 0, DType::Float64);
/// assert!(z.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: TypedBuffer,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create an `nrows x ncols` zero matrix of the given precision.
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn zeros(nrows: usize, ncols: usize, dtype: DType) -> Self {
        let len = nrows
            .checked_mul(ncols)
            .unwrap_or_else(|| panic!("{nrows}x{ncols} matrix: element count overflows usize"));
        Self {
            data: TypedBuffer::zeros(dtype, len),
            nrows,
            ncols,
        }
    }

    /// Wrap a row-major buffer. Fails if its length is not `nrows * ncols`.
    pub fn from_buffer(
        nrows: usize,
        ncols: usize,
        data: TypedBuffer,
    ) -> Result<Self, DimensionMismatch> {
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(DimensionMismatch {
                shape: (nrows, ncols),
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from an owned row-major `Vec<T>`.
    ///
    /// ```
    /// use poisson_variance::{DType, Matrix};
    /// let m = Matrix::from_rows(2, 3, vec![1_i32, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.get(1, 0), 4.0);
    /// assert_eq!(m.dtype(), DType::Int32);
    /// ```
    pub fn from_rows<T: Element>(
        nrows: usize,
        ncols: usize,
        row_major: Vec<T>,
    ) -> Result<Self, DimensionMismatch> {
        Self::from_buffer(nrows, ncols, T::wrap(row_major))
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use poisson_variance::{DType, Matrix};
    /// let m = Matrix::from_fn(2, 2, DType::Float32, |i, j| (i * 2 + j) as f64);
    /// assert_eq!(m.get(1, 1), 3.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, dtype: DType, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut m = Self::zeros(nrows, ncols, dtype);
        for i in 0..nrows {
            for j in 0..ncols {
                m.set(i, j, f(i, j));
            }
        }
        m
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether either extent is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element precision.
    #[inline]
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Row-major backing buffer.
    #[inline]
    pub fn data(&self) -> &TypedBuffer {
        &self.data
    }

    /// Read element `(row, col)` widened to `f64`.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data.get(self.offset(row, col))
    }

    /// Store `x` at `(row, col)`, narrowing to the matrix precision.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, x: f64) {
        let k = self.offset(row, col);
        self.data.set(k, x);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        row * self.ncols + col
    }
}
