//! Element-wise Poisson variance over numbers and containers.
//!
//! [`apply`] takes an [`Input`], a closed set of shapes fixed at the call
//! boundary, and applies [`variance`] to every λ it holds:
//!
//! | Input | λ per element | Output |
//! |-------|---------------|--------|
//! | [`Input::Number`] | the number | [`Output::Number`] |
//! | [`Input::Sequence`] | the element, `accessor(element, index)`, or the field at `path` | [`Output::Sequence`], or [`Output::Buffer`] when `dtype` is set |
//! | [`Input::Buffer`] | each element | [`Output::Buffer`] |
//! | [`Input::Matrix`] | each element, row-major | [`Output::Matrix`] |
//! | [`Input::Unsupported`] | none | [`Output::Number`] holding NaN |
//!
//! Container outputs say whether the input storage was reused through
//! [`Target`]. For typed buffers and matrices:
//!
//! | `copy` | `dtype` | Result |
//! |--------|---------|--------|
//! | `true` | any | new container, `dtype` or `float64` |
//! | `false` | unset or equal to the input's | input mutated in place |
//! | `false` | differs from the input's | new container of `dtype` |
//!
//! A precision change cannot be stored in the input's elements, so it always
//! allocates. Path mode always writes into the input records; accessor and
//! plain sequence modes follow `copy`.
//!
//! Invalid λ never fail the call: they become NaN (`null` inside JSON
//! values, `0` in integer precisions).
//!
//! # Example
//!
//! ```
//! use poisson_variance::{apply, Input, Options};
//! use serde_json::json;
//!
//! let mut records = vec![json!({ "lambda": 2 }), json!({ "lambda": -4 })];
//! let opts = Options::new()
//!     .accessor(|e, _| e["lambda"].as_f64().unwrap_or(f64::NAN))
//!     .copy(false);
//!
//! let out = apply(Input::Sequence(&mut records), &opts).unwrap();
//! assert!(out.is_mutated());
//! assert_eq!(records, vec![json!(2.0), json!(null)]);
//! ```

mod options;
mod strategy;


pub use options::{Accessor, Options};

use core::ops::Deref;

use log::{debug, trace};
use serde_json::Value;

use crate::buffer::TypedBuffer;
use crate::dtype::DType;
use crate::error::VarianceError;
use crate::matrix::Matrix;
use crate::path::DeepPath;
use crate::stats::variance;

use strategy::{lambda_of, to_value, ByAccessor, ByPath, Extract, Raw};

/// Input to [`apply`].
#[derive(Debug)]
pub enum Input<'a> {
    /// A single λ.
    Number(f64),
    /// Numbers or nested records.
    Sequence(&'a mut Vec<Value>),
    /// Fixed-width numeric buffer.
    Buffer(&'a mut TypedBuffer),
    /// Dense 2-D matrix.
    Matrix(&'a mut Matrix),
    /// Anything else: booleans, null, objects, strings.
    Unsupported,
}

impl From<f64> for Input<'_> {
    fn from(lambda: f64) -> Self {
        Input::Number(lambda)
    }
}

impl<'a> From<&'a mut Vec<Value>> for Input<'a> {
    fn from(items: &'a mut Vec<Value>) -> Self {
        Input::Sequence(items)
    }
}

impl<'a> From<&'a mut TypedBuffer> for Input<'a> {
    fn from(buf: &'a mut TypedBuffer) -> Self {
        Input::Buffer(buf)
    }
}

impl<'a> From<&'a mut Matrix> for Input<'a> {
    fn from(m: &'a mut Matrix) -> Self {
        Input::Matrix(m)
    }
}

impl<'a> From<&'a mut Value> for Input<'a> {
    /// Numbers become [`Input::Number`], arrays [`Input::Sequence`], and
    /// every other JSON value [`Input::Unsupported`].
    fn from(value: &'a mut Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Input::Unsupported, Input::Number),
            Value::Array(items) => Input::Sequence(items),
            _ => Input::Unsupported,
        }
    }
}

/// Container result: the mutated input or a newly allocated container.
#[derive(Debug)]
pub enum Target<'a, T> {
    /// The input's own storage, written in place.
    Mutated(&'a mut T),
    /// Fresh storage; the input is untouched.
    Allocated(T),
}

impl<T> Target<'_, T> {
    /// Whether the input storage was reused.
    pub fn is_mutated(&self) -> bool {
        matches!(self, Target::Mutated(_))
    }

    /// Take the container by value, cloning if it is borrowed.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Target::Mutated(t) => t.clone(),
            Target::Allocated(t) => t,
        }
    }
}

impl<T> Deref for Target<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Target::Mutated(t) => &**t,
            Target::Allocated(t) => t,
        }
    }
}

/// Result of [`apply`], shaped like its input.
#[derive(Debug)]
pub enum Output<'a> {
    Number(f64),
    Sequence(Target<'a, Vec<Value>>),
    Buffer(Target<'a, TypedBuffer>),
    Matrix(Target<'a, Matrix>),
}

impl Output<'_> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Output::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Output::Sequence(t) => Some(t.as_slice()),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&TypedBuffer> {
        match self {
            Output::Buffer(t) => Some(&**t),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Output::Matrix(t) => Some(&**t),
            _ => None,
        }
    }

    /// Whether the result lives in the input's storage.
    pub fn is_mutated(&self) -> bool {
        match self {
            Output::Number(_) => false,
            Output::Sequence(t) => t.is_mutated(),
            Output::Buffer(t) => t.is_mutated(),
            Output::Matrix(t) => t.is_mutated(),
        }
    }
}

/// Compute the Poisson variance of `input`, element-wise for containers.
///
/// Numbers and unsupported inputs ignore `opts`. For containers the `dtype`
/// option is resolved before any element is touched, so an unknown dtype
/// name fails the call with no partial writes.
///
/// ```
/// use poisson_variance::{apply, DType, Input, Options, TypedBuffer};
///
/// let mut lambda = TypedBuffer::from(vec![2.0_f64, 4.0, -1.0]);
/// let out = apply(Input::Buffer(&mut lambda), &Options::new().dtype(DType::Float32)).unwrap();
/// let buf = out.as_buffer().unwrap();
/// assert_eq!(buf.dtype(), DType::Float32);
/// assert_eq!(buf.get(1), 4.0);
/// assert!(buf.get(2).is_nan());
/// ```
pub fn apply<'a>(input: Input<'a>, opts: &Options) -> Result<Output<'a>, VarianceError> {
    match input {
        Input::Unsupported => {
            debug!("unsupported input shape, returning NaN");
            Ok(Output::Number(f64::NAN))
        }
        Input::Number(lambda) => Ok(Output::Number(variance(lambda))),
        Input::Matrix(m) => {
            let dtype = opts.resolve_dtype()?;
            Ok(Output::Matrix(apply_matrix(m, dtype, opts.is_copy())))
        }
        Input::Buffer(buf) => {
            let dtype = opts.resolve_dtype()?;
            Ok(Output::Buffer(apply_buffer(buf, dtype, opts.is_copy())))
        }
        Input::Sequence(items) => {
            let dtype = opts.resolve_dtype()?;
            Ok(apply_sequence(items, dtype, opts))
        }
    }
}

/// [`apply`] on a JSON value, classified with `Input::from`.
///
/// ```
/// use poisson_variance::{apply_value, Options};
/// use serde_json::json;
///
/// let mut v = json!(8);
/// let out = apply_value(&mut v, &Options::default()).unwrap();
/// assert_eq!(out.as_number(), Some(8.0));
///
/// let mut v = json!(true);
/// assert!(apply_value(&mut v, &Options::default()).unwrap().as_number().unwrap().is_nan());
/// ```
pub fn apply_value<'a>(value: &'a mut Value, opts: &Options) -> Result<Output<'a>, VarianceError> {
    apply(Input::from(value), opts)
}

// ── Storage decision ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    InPlace,
    Allocate(DType),
}

/// Decide where results for a typed container of precision `native` go.
fn plan(native: DType, requested: Option<DType>, copy: bool) -> Plan {
    match (copy, requested) {
        (true, requested) => Plan::Allocate(requested.unwrap_or_default()),
        (false, None) => Plan::InPlace,
        (false, Some(dtype)) if dtype == native => Plan::InPlace,
        (false, Some(dtype)) => {
            debug!("copy disabled but dtype changes {native} -> {dtype}, allocating");
            Plan::Allocate(dtype)
        }
    }
}

// ── Strategies ──────────────────────────────────────────────────────

fn apply_matrix(m: &mut Matrix, requested: Option<DType>, copy: bool) -> Target<'_, Matrix> {
    let (nrows, ncols) = m.shape();
    match plan(m.dtype(), requested, copy) {
        Plan::InPlace => {
            debug!("matrix {nrows}x{ncols} {}: in place", m.dtype());
            m.map_in_place(variance);
            Target::Mutated(m)
        }
        Plan::Allocate(dtype) if m.is_empty() => {
            trace!("empty matrix {nrows}x{ncols}, nothing to compute");
            Target::Allocated(Matrix::zeros(nrows, ncols, dtype))
        }
        Plan::Allocate(dtype) => {
            debug!("matrix {nrows}x{ncols} {} -> new {dtype}", m.dtype());
            Target::Allocated(m.map_to(dtype, variance))
        }
    }
}

fn apply_buffer(buf: &mut TypedBuffer, requested: Option<DType>, copy: bool) -> Target<'_, TypedBuffer> {
    match plan(buf.dtype(), requested, copy) {
        Plan::InPlace => {
            debug!("buffer of {} {}: in place", buf.len(), buf.dtype());
            buf.map_in_place(variance);
            Target::Mutated(buf)
        }
        Plan::Allocate(dtype) if buf.is_empty() => {
            trace!("empty buffer, nothing to compute");
            Target::Allocated(TypedBuffer::zeros(dtype, 0))
        }
        Plan::Allocate(dtype) => {
            debug!("buffer of {} {} -> new {dtype}", buf.len(), buf.dtype());
            Target::Allocated(buf.map_to(dtype, variance))
        }
    }
}

fn apply_sequence<'a>(items: &'a mut Vec<Value>, dtype: Option<DType>, opts: &Options) -> Output<'a> {
    let copy = opts.is_copy();
    if let Some(accessor) = opts.accessor_fn() {
        debug!("sequence of {}: accessor", items.len());
        return Output::Sequence(run(items, &ByAccessor(accessor), copy));
    }
    if let Some(path) = opts.path_str() {
        debug!("sequence of {}: deep path `{path}`", items.len());
        let strategy = ByPath(DeepPath::new(path, opts.sep_str()));
        return Output::Sequence(run(items, &strategy, copy));
    }
    match dtype {
        Some(dtype) => {
            if !copy {
                debug!("copy disabled but sequence cannot hold {dtype}, allocating");
            }
            debug!("sequence of {} -> new {dtype} buffer", items.len());
            let mut out = TypedBuffer::zeros(dtype, items.len());
            for (i, item) in items.iter().enumerate() {
                out.set(i, variance(lambda_of(item)));
            }
            Output::Buffer(Target::Allocated(out))
        }
        None => {
            debug!("sequence of {}: raw values", items.len());
            Output::Sequence(run(items, &Raw, copy))
        }
    }
}

/// Shared element loop for all sequence strategies.
fn run<'a, E: Extract>(items: &'a mut Vec<Value>, strategy: &E, copy: bool) -> Target<'a, Vec<Value>> {
    if copy && !strategy.always_in_place() {
        let out = items
            .iter()
            .enumerate()
            .map(|(i, item)| to_value(variance(strategy.extract(item, i))))
            .collect();
        return Target::Allocated(out);
    }
    for (i, item) in items.iter_mut().enumerate() {
        let result = variance(strategy.extract(item, i));
        strategy.write(item, result);
    }
    trace!("wrote {} results in place", items.len());
    Target::Mutated(items)
}
