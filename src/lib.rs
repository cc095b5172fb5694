//! # poisson-variance
//!
//! Variance of the Poisson distribution (Var(X) = λ) for a single rate or
//! element-wise over sequences, typed numeric buffers, dense matrices, and
//! collections of nested JSON records.
//!
//! ## Quick start
//!
//! ```
//! use poisson_variance::{apply, DType, Input, Matrix, Options};
//!
//! // Scalars
//! let out = apply(Input::Number(4.0), &Options::default()).unwrap();
//! assert_eq!(out.as_number(), Some(4.0));
//!
//! // Matrices, with a different output precision
//! let mut m = Matrix::from_rows(2, 2, vec![1.0_f64, 2.0, 0.0, 8.0]).unwrap();
//! let out = apply(Input::Matrix(&mut m), &Options::new().dtype(DType::Float32)).unwrap();
//! let v = out.as_matrix().unwrap();
//! assert_eq!(v.dtype(), DType::Float32);
//! assert_eq!(v.get(1, 1), 8.0);
//! assert!(v.get(1, 0).is_nan());
//! ```
//!
//! ## Modules
//!
//! - [`elementwise`] — [`apply`] and its [`Input`] / [`Output`] / [`Options`]
//!   types. Chooses one strategy per call (raw values, accessor, deep path,
//!   typed buffer, matrix) and decides between writing in place and
//!   allocating.
//!
//! - [`stats`] — the scalar kernel [`stats::variance`] and the validated
//!   [`stats::Poisson`] distribution.
//!
//! - [`buffer`] — [`TypedBuffer`], a fixed-width numeric buffer tagged with
//!   its [`DType`].
//!
//! - [`matrix`] — [`Matrix`], a dense row-major 2-D container over a
//!   [`TypedBuffer`].
//!
//! - [`dtype`] — the closed set of supported precisions.
//!
//! - [`path`] — [`DeepPath`], nested field access into `serde_json::Value`.
//!
//! - [`traits`] — element trait hierarchy:
//!   - [`Scalar`] — numeric element types
//!   - [`FloatScalar`] — real floats, used by the scalar variance
//!   - [`Element`] — fixed-width types that can back a [`TypedBuffer`]
//!
//! ## Invalid rates
//!
//! A λ that is not a positive finite number never fails a call. It becomes
//! NaN in floating-point outputs, `null` inside JSON values, and `0` in
//! integer precisions. Only bad options (an unknown `dtype`, a non-callable
//! `accessor`) return a [`VarianceError`].

pub mod buffer;
pub mod dtype;
pub mod elementwise;
pub mod error;
pub mod matrix;
pub mod path;
pub mod stats;
pub mod traits;

pub use buffer::TypedBuffer;
pub use dtype::DType;
pub use elementwise::{apply, apply_value, Accessor, Input, Options, Output, Target};
pub use error::VarianceError;
pub use matrix::{DimensionMismatch, Matrix};
pub use path::DeepPath;
pub use stats::{Poisson, StatsError};
pub use traits::{Element, FloatScalar, Scalar};
