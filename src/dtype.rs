//! Supported numeric precisions.
//!
//! The set of precisions is closed and fixed at compile time. Each tag maps to
//! a name (as accepted by [`DType::from_name`] and the `dtype` option) and a
//! byte width.
//!
//! | Tag | Name | Bytes |
//! |-----|------|-------|
//! | [`DType::Int8`] | `int8` | 1 |
//! | [`DType::Uint8`] | `uint8` | 1 |
//! | [`DType::Uint8Clamped`] | `uint8_clamped` | 1 |
//! | [`DType::Int16`] | `int16` | 2 |
//! | [`DType::Uint16`] | `uint16` | 2 |
//! | [`DType::Int32`] | `int32` | 4 |
//! | [`DType::Uint32`] | `uint32` | 4 |
//! | [`DType::Int64`] | `int64` | 8 |
//! | [`DType::Uint64`] | `uint64` | 8 |
//! | [`DType::Float32`] | `float32` | 4 |
//! | [`DType::Float64`] | `float64` | 8 |

use core::fmt;
use core::str::FromStr;

use crate::error::VarianceError;

/// Element precision tag for typed buffers and matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DType {
    Int8,
    Uint8,
    /// Unsigned byte that rounds and clamps on store instead of truncating.
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    #[default]
    Float64,
}

const TABLE: [(DType, &str, usize); 11] = [
    (DType::Int8, "int8", 1),
    (DType::Uint8, "uint8", 1),
    (DType::Uint8Clamped, "uint8_clamped", 1),
    (DType::Int16, "int16", 2),
    (DType::Uint16, "uint16", 2),
    (DType::Int32, "int32", 4),
    (DType::Uint32, "uint32", 4),
    (DType::Int64, "int64", 8),
    (DType::Uint64, "uint64", 8),
    (DType::Float32, "float32", 4),
    (DType::Float64, "float64", 8),
];

impl DType {
    /// Every supported precision, in table order.
    pub const ALL: [DType; 11] = [
        DType::Int8,
        DType::Uint8,
        DType::Uint8Clamped,
        DType::Int16,
        DType::Uint16,
        DType::Int32,
        DType::Uint32,
        DType::Int64,
        DType::Uint64,
        DType::Float32,
        DType::Float64,
    ];

    fn entry(self) -> (DType, &'static str, usize) {
        TABLE[self as usize]
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Size of one element in bytes.
    pub fn bytes_per_element(self) -> usize {
        self.entry().2
    }

    /// Look up a precision by name.
    ///
    /// ```
    /// use poisson_variance::DType;
    /// assert_eq!(DType::from_name("int32"), Some(DType::Int32));
    /// assert_eq!(DType::from_name("beep"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<DType> {
        TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(dtype, _, _)| *dtype)
    }
}

impl FromStr for DType {
    type Err = VarianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::from_name(s).ok_or_else(|| VarianceError::UnknownDType(s.to_owned()))
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for dtype in DType::ALL {
            assert_eq!(TABLE[dtype as usize].0, dtype);
        }
    }

    #[test]
    fn names_round_trip() {
        for dtype in DType::ALL {
            assert_eq!(dtype.name().parse::<DType>(), Ok(dtype));
        }
    }

    #[test]
    fn byte_widths() {
        assert_eq!(DType::Int8.bytes_per_element(), 1);
        assert_eq!(DType::Uint8Clamped.bytes_per_element(), 1);
        assert_eq!(DType::Int32.bytes_per_element(), 4);
        assert_eq!(DType::Float32.bytes_per_element(), 4);
        assert_eq!(DType::Float64.bytes_per_element(), 8);
        assert_eq!(DType::Uint64.bytes_per_element(), 8);
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["beep", "boop", "", "Float64", "generic"] {
            assert_eq!(
                name.parse::<DType>(),
                Err(VarianceError::UnknownDType(name.to_owned()))
            );
        }
    }

    #[test]
    fn default_is_float64() {
        assert_eq!(DType::default(), DType::Float64);
    }
}
