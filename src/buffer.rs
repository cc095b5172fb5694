use crate::dtype::DType;
use crate::traits::{clamp_u8, Element};

/// Fixed-width numeric buffer tagged with its element precision.
///
/// Each variant owns a contiguous `Vec` of the matching primitive type.
/// Reads widen to `f64`; writes narrow from `f64` using the conversion of the
/// element type (see [`Element`]), with `Uint8Clamped` rounding and clamping.
///
/// # Examples
///
/// ```
/// use poisson_variance::{DType, TypedBuffer};
///
/// let mut b = TypedBuffer::zeros(DType::Int16, 3);
/// b.set(1, 7.9);
/// assert_eq!(b.get(1), 7.0);
/// assert_eq!(b.len(), 3);
/// assert_eq!(b.dtype().bytes_per_element(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBuffer {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int64(Vec<i64>),
    Uint64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Expand `$body` once per variant with `$v` bound to the inner `Vec`.
macro_rules! each_variant {
    ($buf:expr, $v:ident => $body:expr) => {
        match $buf {
            TypedBuffer::Int8($v) => $body,
            TypedBuffer::Uint8($v) => $body,
            TypedBuffer::Uint8Clamped($v) => $body,
            TypedBuffer::Int16($v) => $body,
            TypedBuffer::Uint16($v) => $body,
            TypedBuffer::Int32($v) => $body,
            TypedBuffer::Uint32($v) => $body,
            TypedBuffer::Int64($v) => $body,
            TypedBuffer::Uint64($v) => $body,
            TypedBuffer::Float32($v) => $body,
            TypedBuffer::Float64($v) => $body,
        }
    };
}

// ── Constructors ────────────────────────────────────────────────────

impl TypedBuffer {
    /// Create a zero-filled buffer of `len` elements.
    pub fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::Int8 => TypedBuffer::Int8(vec![0; len]),
            DType::Uint8 => TypedBuffer::Uint8(vec![0; len]),
            DType::Uint8Clamped => TypedBuffer::Uint8Clamped(vec![0; len]),
            DType::Int16 => TypedBuffer::Int16(vec![0; len]),
            DType::Uint16 => TypedBuffer::Uint16(vec![0; len]),
            DType::Int32 => TypedBuffer::Int32(vec![0; len]),
            DType::Uint32 => TypedBuffer::Uint32(vec![0; len]),
            DType::Int64 => TypedBuffer::Int64(vec![0; len]),
            DType::Uint64 => TypedBuffer::Uint64(vec![0; len]),
            DType::Float32 => TypedBuffer::Float32(vec![0.0; len]),
            DType::Float64 => TypedBuffer::Float64(vec![0.0; len]),
        }
    }

    /// Wrap bytes as a clamped `uint8` buffer.
    pub fn clamped(data: Vec<u8>) -> Self {
        TypedBuffer::Uint8Clamped(data)
    }
}

impl<T: Element> From<Vec<T>> for TypedBuffer {
    fn from(data: Vec<T>) -> Self {
        T::wrap(data)
    }
}

impl<T: Element> From<&[T]> for TypedBuffer {
    fn from(data: &[T]) -> Self {
        T::wrap(data.to_vec())
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl TypedBuffer {
    /// Element precision.
    pub fn dtype(&self) -> DType {
        match self {
            TypedBuffer::Int8(_) => DType::Int8,
            TypedBuffer::Uint8(_) => DType::Uint8,
            TypedBuffer::Uint8Clamped(_) => DType::Uint8Clamped,
            TypedBuffer::Int16(_) => DType::Int16,
            TypedBuffer::Uint16(_) => DType::Uint16,
            TypedBuffer::Int32(_) => DType::Int32,
            TypedBuffer::Uint32(_) => DType::Uint32,
            TypedBuffer::Int64(_) => DType::Int64,
            TypedBuffer::Uint64(_) => DType::Uint64,
            TypedBuffer::Float32(_) => DType::Float32,
            TypedBuffer::Float64(_) => DType::Float64,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        each_variant!(self, v => v.len())
    }

    /// Whether the buffer has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read element `i` widened to `f64`.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        each_variant!(self, v => v[i].to_f64())
    }

    /// Store `x` at element `i`, narrowing to the buffer precision.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn set(&mut self, i: usize, x: f64) {
        match self {
            TypedBuffer::Uint8Clamped(v) => v[i] = clamp_u8(x),
            TypedBuffer::Int8(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Uint8(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Int16(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Uint16(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Int32(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Uint32(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Int64(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Uint64(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Float32(v) => v[i] = Element::from_f64(x),
            TypedBuffer::Float64(v) => v[i] = x,
        }
    }

    /// Borrow the contents as a slice of `T`, if stored as `T`.
    ///
    /// ```
    /// use poisson_variance::TypedBuffer;
    /// let b = TypedBuffer::from(vec![1.0_f32, 2.0]);
    /// assert_eq!(b.as_slice::<f32>(), Some(&[1.0_f32, 2.0][..]));
    /// assert_eq!(b.as_slice::<f64>(), None);
    /// ```
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::view(self)
    }

    /// Copy all elements out as `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        each_variant!(self, v => v.iter().map(|&x| x.to_f64()).collect())
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl TypedBuffer {
    /// Apply `f` to every element in place, keeping the precision.
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        match self {
            TypedBuffer::Uint8Clamped(v) => {
                for x in v.iter_mut() {
                    *x = clamp_u8(f(x.to_f64()));
                }
            }
            TypedBuffer::Float64(v) => {
                for x in v.iter_mut() {
                    *x = f(*x);
                }
            }
            other => each_variant!(other, v => {
                for x in v.iter_mut() {
                    *x = Element::from_f64(f(x.to_f64()));
                }
            }),
        }
    }

    /// Apply `f` to every element, producing a new buffer of precision `dtype`.
    ///
    /// ```
    /// use poisson_variance::{DType, TypedBuffer};
    /// let b = TypedBuffer::from(vec![1_i8, 2, 3]);
    /// let r = b.map_to(DType::Float32, |x| x / 2.0);
    /// assert_eq!(r.as_slice::<f32>(), Some(&[0.5_f32, 1.0, 1.5][..]));
    /// ```
    pub fn map_to(&self, dtype: DType, f: impl Fn(f64) -> f64) -> TypedBuffer {
        let mut out = TypedBuffer::zeros(dtype, self.len());
        for i in 0..self.len() {
            out.set(i, f(self.get(i)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_dtype_and_len() {
        for dtype in DType::ALL {
            let b = TypedBuffer::zeros(dtype, 4);
            assert_eq!(b.dtype(), dtype);
            assert_eq!(b.len(), 4);
            assert!(b.to_f64_vec().iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn empty() {
        let b = TypedBuffer::zeros(DType::Int8, 0);
        assert!(b.is_empty());
        assert_eq!(b.to_f64_vec(), Vec::<f64>::new());
    }

    #[test]
    fn from_vec_picks_variant() {
        assert_eq!(TypedBuffer::from(vec![1_i8]).dtype(), DType::Int8);
        assert_eq!(TypedBuffer::from(vec![1_u8]).dtype(), DType::Uint8);
        assert_eq!(TypedBuffer::from(vec![1_u64]).dtype(), DType::Uint64);
        assert_eq!(TypedBuffer::from(vec![1.0_f64]).dtype(), DType::Float64);
        assert_eq!(TypedBuffer::clamped(vec![1]).dtype(), DType::Uint8Clamped);
    }

    #[test]
    fn set_narrows() {
        let mut b = TypedBuffer::zeros(DType::Int32, 2);
        b.set(0, 3.7);
        b.set(1, f64::NAN);
        assert_eq!(b.as_slice::<i32>(), Some(&[3, 0][..]));

        let mut f = TypedBuffer::zeros(DType::Float32, 1);
        f.set(0, f64::NAN);
        assert!(f.get(0).is_nan());
    }

    #[test]
    fn clamped_and_plain_u8_share_slice_type() {
        let c = TypedBuffer::clamped(vec![1, 2]);
        assert_eq!(c.as_slice::<u8>(), Some(&[1_u8, 2][..]));
        assert_eq!(c.as_slice::<i8>(), None);
    }

    #[test]
    fn map_in_place_keeps_dtype() {
        let mut b = TypedBuffer::from(vec![1_u16, 2, 3]);
        b.map_in_place(|x| x * 10.0);
        assert_eq!(b.as_slice::<u16>(), Some(&[10_u16, 20, 30][..]));

        let mut c = TypedBuffer::clamped(vec![100, 200]);
        c.map_in_place(|x| x * 2.0);
        assert_eq!(c.as_slice::<u8>(), Some(&[200_u8, 255][..]));
    }

    #[test]
    fn map_to_changes_dtype() {
        let b = TypedBuffer::from(vec![2.0_f64, -1.0]);
        let r = b.map_to(DType::Uint8, |x| x * 3.0);
        assert_eq!(r.dtype(), DType::Uint8);
        assert_eq!(r.as_slice::<u8>(), Some(&[6_u8, 0][..]));
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds() {
        let b = TypedBuffer::zeros(DType::Float64, 2);
        let _ = b.get(2);
    }
}
