use core::fmt::Debug;
use num_traits::{AsPrimitive, Float, Num, One, Zero};

use crate::buffer::TypedBuffer;
use crate::dtype::DType;

/// Trait for numeric element types.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need NaN and finiteness checks,
/// such as the scalar Poisson variance.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Fixed-width element types that can back a [`TypedBuffer`].
///
/// Conversions from `f64` follow Rust `as` semantics: integer targets
/// truncate toward zero, saturate at their bounds, and map NaN to `0`.
pub trait Element: Scalar + 'static {
    /// Precision tag of buffers holding this type.
    const DTYPE: DType;

    /// Store an `f64` result as `Self`.
    fn from_f64(x: f64) -> Self;

    /// Widen `self` to `f64` for evaluation.
    fn to_f64(self) -> f64;

    /// Wrap an owned vector in the matching buffer variant.
    fn wrap(data: Vec<Self>) -> TypedBuffer;

    /// Borrow the buffer contents if they are stored as `Self`.
    fn view(buf: &TypedBuffer) -> Option<&[Self]>;
}

macro_rules! impl_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$variant;

                #[inline]
                fn from_f64(x: f64) -> $t {
                    x.as_()
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self.as_()
                }

                fn wrap(data: Vec<$t>) -> TypedBuffer {
                    TypedBuffer::$variant(data)
                }

                fn view(buf: &TypedBuffer) -> Option<&[$t]> {
                    match buf {
                        TypedBuffer::$variant(v) => Some(v.as_slice()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_element!(
    i8 => Int8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
);

// `u8` backs both `uint8` and `uint8_clamped`; wrapping picks the plain tag.
impl Element for u8 {
    const DTYPE: DType = DType::Uint8;

    #[inline]
    fn from_f64(x: f64) -> u8 {
        x.as_()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    fn wrap(data: Vec<u8>) -> TypedBuffer {
        TypedBuffer::Uint8(data)
    }

    fn view(buf: &TypedBuffer) -> Option<&[u8]> {
        match buf {
            TypedBuffer::Uint8(v) | TypedBuffer::Uint8Clamped(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

/// Store an `f64` into a clamped byte: round half to even, then clamp to `[0, 255]`.
#[inline]
pub(crate) fn clamp_u8(x: f64) -> u8 {
    x.round_ties_even().as_()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversion_truncates_and_saturates() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(i8::from_f64(1000.0), i8::MAX);
        assert_eq!(u16::from_f64(-5.0), 0);
        assert_eq!(i64::from_f64(f64::NAN), 0);
    }

    #[test]
    fn float_conversion_keeps_nan() {
        assert!(f32::from_f64(f64::NAN).is_nan());
        assert_eq!(f32::from_f64(0.5), 0.5_f32);
        assert!(f64::from_f64(f64::INFINITY).is_infinite());
    }

    #[test]
    fn clamped_rounds_half_to_even() {
        assert_eq!(clamp_u8(2.5), 2);
        assert_eq!(clamp_u8(3.5), 4);
        assert_eq!(clamp_u8(300.0), 255);
        assert_eq!(clamp_u8(-1.0), 0);
        assert_eq!(clamp_u8(f64::NAN), 0);
    }

    #[test]
    fn dtype_tags() {
        assert_eq!(<i8 as Element>::DTYPE, DType::Int8);
        assert_eq!(<u8 as Element>::DTYPE, DType::Uint8);
        assert_eq!(<f32 as Element>::DTYPE, DType::Float32);
        assert_eq!(<f64 as Element>::DTYPE, DType::Float64);
    }
}
